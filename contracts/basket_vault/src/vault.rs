use basket::error::ErrorCode;
use soroban_sdk::{ Address, Env, Vec, U256 };

use crate::{
    msg::{ IssueQuote, RedeemQuote },
    storage::{ BasketWeights, Config, FeeConfig, Operation, PriceFeeds, VaultState },
};

pub trait BasketVaultTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        collateral_token: Address,
        unit_token: Address,
        feeds: PriceFeeds,
        weights: BasketWeights,
        fees: FeeConfig,
        min_collateral_ratio_bps: u32,
        max_price_age: u64
    ) -> Result<(), ErrorCode>;

    fn update_basket_weights(
        env: Env,
        sender: Address,
        gold_bps: u32,
        bitcoin_bps: u32,
        dollar_bps: u32
    ) -> Result<(), ErrorCode>;

    fn update_fees(
        env: Env,
        sender: Address,
        mint_fee_bps: u32,
        burn_fee_bps: u32
    ) -> Result<(), ErrorCode>;

    fn update_collateral_ratio(
        env: Env,
        sender: Address,
        min_collateral_ratio_bps: u32
    ) -> Result<(), ErrorCode>;

    fn update_paused_operations(
        env: Env,
        sender: Address,
        to_add: Vec<Operation>,
        to_remove: Vec<Operation>
    ) -> Result<(), ErrorCode>;

    fn update_price_feeds(env: Env, sender: Address, feeds: PriceFeeds) -> Result<(), ErrorCode>;

    fn update_max_price_age(env: Env, sender: Address, max_price_age: u64) -> Result<(), ErrorCode>;

    fn set_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    /// Deposit `collateral` (native decimals) and receive units. Returns units issued.
    fn issue(env: Env, sender: Address, collateral: i128) -> Result<i128, ErrorCode>;

    /// Burn `units` and receive collateral. Returns collateral paid out.
    fn redeem(env: Env, sender: Address, units: i128) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_admin(env: Env) -> Result<Address, ErrorCode>;

    fn query_config(env: Env) -> Result<Config, ErrorCode>;

    fn query_state(env: Env) -> Result<VaultState, ErrorCode>;

    fn query_basket_value(env: Env) -> Result<U256, ErrorCode>;

    fn query_value_per_unit(env: Env) -> Result<U256, ErrorCode>;

    fn query_collateral_price(env: Env) -> Result<U256, ErrorCode>;

    fn query_issue_quote(env: Env, collateral: i128) -> Result<IssueQuote, ErrorCode>;

    fn query_redeem_quote(env: Env, units: i128) -> Result<RedeemQuote, ErrorCode>;

    fn query_collateral_ratio(env: Env) -> Result<Option<u128>, ErrorCode>;
}
