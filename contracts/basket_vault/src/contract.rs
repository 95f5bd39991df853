use basket::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, STANDARD_PRECISION_DECIMALS },
    error::ErrorCode,
    ledger::UnitLedgerClient,
    validate,
};
use soroban_sdk::{ contract, contractimpl, contractmeta, log, token, Address, Env, Vec, U256 };

use crate::{
    controller::{ self, config::validate_admin },
    events::VaultEvents,
    msg::{ IssueQuote, RedeemQuote },
    storage::{
        get_admin,
        get_config,
        get_state,
        is_initialized,
        save_admin,
        save_config,
        save_state,
        set_initialized,
        BasketWeights,
        Config,
        FeeConfig,
        Operation,
        PriceFeeds,
        VaultState,
    },
    vault::BasketVaultTrait,
};

contractmeta!(
    key = "Description",
    val = "Collateralized issuance of a gold, bitcoin and dollar basket unit"
);

#[contract]
pub struct BasketVault;

fn transfer_collateral(
    env: &Env,
    config: &Config,
    from: &Address,
    to: &Address,
    amount: i128
) -> Result<(), ErrorCode> {
    match token::Client::new(env, &config.collateral_token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Basket Vault: Collateral transfer failed", from.clone(), to.clone(), amount);
            Err(ErrorCode::TransferFailed)
        }
    }
}

#[contractimpl]
impl BasketVaultTrait for BasketVault {
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
    ) -> Result<(), ErrorCode> {
        admin.require_auth();

        if is_initialized(&env) {
            log!(&env, "Basket Vault: Initialize: Already initialized");
            return Err(ErrorCode::AlreadyInitialized);
        }

        controller::config::validate_weights(&env, &weights)?;
        controller::config::validate_fees(&env, &fees)?;
        controller::config::validate_collateral_ratio(&env, min_collateral_ratio_bps)?;

        let collateral_decimals = token::Client::new(&env, &collateral_token).decimals();
        validate!(
            &env,
            collateral_decimals <= STANDARD_PRECISION_DECIMALS,
            ErrorCode::InvalidDecimals,
            "Basket Vault: Initialize: collateral decimals too large: {}",
            collateral_decimals
        )?;
        let unit_decimals = token::Client::new(&env, &unit_token).decimals();
        validate!(
            &env,
            unit_decimals == STANDARD_PRECISION_DECIMALS,
            ErrorCode::InvalidDecimals,
            "Basket Vault: Initialize: unit token must use standard precision: {}",
            unit_decimals
        )?;

        save_admin(&env, &admin);
        save_config(&env, &Config {
            collateral_token: collateral_token.clone(),
            collateral_decimals,
            unit_token: unit_token.clone(),
            feeds,
            weights,
            fees,
            min_collateral_ratio_bps,
            max_price_age,
            paused_operations: Vec::new(&env),
        });
        save_state(&env, &VaultState::new(&env));
        set_initialized(&env);

        VaultEvents::initialize(&env, admin, collateral_token, unit_token);

        Ok(())
    }

    fn update_basket_weights(
        env: Env,
        sender: Address,
        gold_bps: u32,
        bitcoin_bps: u32,
        dollar_bps: u32
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        validate_admin(&env, &sender)?;

        let weights = BasketWeights { gold_bps, bitcoin_bps, dollar_bps };
        controller::config::validate_weights(&env, &weights)?;

        let mut config = get_config(&env)?;
        config.weights = weights;
        save_config(&env, &config);

        VaultEvents::update_basket_weights(&env, sender, weights);

        Ok(())
    }

    fn update_fees(
        env: Env,
        sender: Address,
        mint_fee_bps: u32,
        burn_fee_bps: u32
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        validate_admin(&env, &sender)?;

        let fees = FeeConfig { mint_fee_bps, burn_fee_bps };
        controller::config::validate_fees(&env, &fees)?;

        let mut config = get_config(&env)?;
        config.fees = fees;
        save_config(&env, &config);

        VaultEvents::update_fees(&env, sender, fees);

        Ok(())
    }

    fn update_collateral_ratio(
        env: Env,
        sender: Address,
        min_collateral_ratio_bps: u32
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        validate_admin(&env, &sender)?;

        controller::config::validate_collateral_ratio(&env, min_collateral_ratio_bps)?;

        let mut config = get_config(&env)?;
        config.min_collateral_ratio_bps = min_collateral_ratio_bps;
        save_config(&env, &config);

        VaultEvents::update_collateral_ratio(&env, sender, min_collateral_ratio_bps);

        Ok(())
    }

    fn update_paused_operations(
        env: Env,
        sender: Address,
        to_add: Vec<Operation>,
        to_remove: Vec<Operation>
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        validate_admin(&env, &sender)?;

        let mut config = get_config(&env)?;
        let mut paused_operations = config.paused_operations;

        to_add.into_iter().for_each(|operation| {
            if !paused_operations.contains(operation) {
                paused_operations.push_back(operation);
            }
        });

        to_remove.into_iter().for_each(|operation| {
            if let Some(id) = paused_operations.first_index_of(operation) {
                paused_operations.remove(id);
            }
        });

        config.paused_operations = paused_operations.clone();
        save_config(&env, &config);

        VaultEvents::update_paused_operations(&env, sender, paused_operations);

        Ok(())
    }

    fn update_price_feeds(env: Env, sender: Address, feeds: PriceFeeds) -> Result<(), ErrorCode> {
        sender.require_auth();
        validate_admin(&env, &sender)?;

        let mut config = get_config(&env)?;
        config.feeds = feeds.clone();
        save_config(&env, &config);

        VaultEvents::update_price_feeds(&env, sender, feeds);

        Ok(())
    }

    fn update_max_price_age(env: Env, sender: Address, max_price_age: u64) -> Result<(), ErrorCode> {
        sender.require_auth();
        validate_admin(&env, &sender)?;

        let mut config = get_config(&env)?;
        config.max_price_age = max_price_age;
        save_config(&env, &config);

        VaultEvents::update_max_price_age(&env, sender, max_price_age);

        Ok(())
    }

    fn set_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), ErrorCode> {
        sender.require_auth();
        validate_admin(&env, &sender)?;

        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        save_admin(&env, &new_admin);

        VaultEvents::set_admin(&env, sender, new_admin);

        Ok(())
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn issue(env: Env, sender: Address, collateral: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;
        let (state, quote) = controller::issue::issue(&env, &config, get_state(&env)?, collateral)?;
        save_state(&env, &state);

        UnitLedgerClient::new(&env, &config.unit_token).mint(&sender, &quote.units);
        transfer_collateral(&env, &config, &sender, &env.current_contract_address(), collateral)?;

        VaultEvents::issue(&env, sender, collateral, quote.units, quote.net_value);

        Ok(quote.units)
    }

    fn redeem(env: Env, sender: Address, units: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;
        let (state, quote) = controller::redeem::redeem(
            &env,
            &config,
            get_state(&env)?,
            &sender,
            units
        )?;

        // burn before paying out
        save_state(&env, &state);
        UnitLedgerClient::new(&env, &config.unit_token).clawback(&sender, &units);

        transfer_collateral(&env, &config, &env.current_contract_address(), &sender, quote.collateral)?;

        VaultEvents::redeem(&env, sender, units, quote.collateral, quote.gross_value);

        Ok(quote.collateral)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_admin(env: Env) -> Result<Address, ErrorCode> {
        get_admin(&env)
    }

    fn query_config(env: Env) -> Result<Config, ErrorCode> {
        get_config(&env)
    }

    fn query_state(env: Env) -> Result<VaultState, ErrorCode> {
        get_state(&env)
    }

    fn query_basket_value(env: Env) -> Result<U256, ErrorCode> {
        let config = get_config(&env)?;
        Ok(controller::valuation::basket_value(&env, &config)?.to_soroban(&env))
    }

    fn query_value_per_unit(env: Env) -> Result<U256, ErrorCode> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        Ok(controller::valuation::value_per_unit(&env, &config, &state)?.to_soroban(&env))
    }

    fn query_collateral_price(env: Env) -> Result<U256, ErrorCode> {
        let config = get_config(&env)?;
        Ok(controller::valuation::collateral_price(&env, &config)?.to_soroban(&env))
    }

    fn query_issue_quote(env: Env, collateral: i128) -> Result<IssueQuote, ErrorCode> {
        let config = get_config(&env)?;
        controller::issue::quote_issue(&env, &config, &get_state(&env)?, collateral)
    }

    fn query_redeem_quote(env: Env, units: i128) -> Result<RedeemQuote, ErrorCode> {
        let config = get_config(&env)?;
        controller::redeem::quote_redeem(&env, &config, &get_state(&env)?, units)
    }

    fn query_collateral_ratio(env: Env) -> Result<Option<u128>, ErrorCode> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        controller::valuation::collateral_ratio(&env, &config, &state)
    }
}
