use soroban_sdk::{ Address, Env, Symbol, Vec, U256 };

use crate::storage::{ BasketWeights, FeeConfig, Operation, PriceFeeds };

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted once when the vault is configured
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[collateral_token: Address, unit_token: Address]`
    pub fn initialize(e: &Env, admin: Address, collateral_token: Address, unit_token: Address) {
        let topics = (Symbol::new(e, "initialize"), admin);
        e.events().publish(topics, (collateral_token, unit_token));
    }

    /// Emitted when units are issued against collateral
    ///
    /// - topics - `["issue", minter: Address]`
    /// - data - `[collateral: i128, units: i128, net_value: U256]`
    pub fn issue(e: &Env, minter: Address, collateral: i128, units: i128, net_value: U256) {
        let topics = (Symbol::new(e, "issue"), minter);
        e.events().publish(topics, (collateral, units, net_value));
    }

    /// Emitted when units are redeemed for collateral
    ///
    /// - topics - `["redeem", redeemer: Address]`
    /// - data - `[units: i128, collateral: i128, gross_value: U256]`
    pub fn redeem(e: &Env, redeemer: Address, units: i128, collateral: i128, gross_value: U256) {
        let topics = (Symbol::new(e, "redeem"), redeemer);
        e.events().publish(topics, (units, collateral, gross_value));
    }

    /// - topics - `["update_basket_weights", admin: Address]`
    /// - data - `weights: BasketWeights`
    pub fn update_basket_weights(e: &Env, admin: Address, weights: BasketWeights) {
        let topics = (Symbol::new(e, "update_basket_weights"), admin);
        e.events().publish(topics, weights);
    }

    /// - topics - `["update_fees", admin: Address]`
    /// - data - `fees: FeeConfig`
    pub fn update_fees(e: &Env, admin: Address, fees: FeeConfig) {
        let topics = (Symbol::new(e, "update_fees"), admin);
        e.events().publish(topics, fees);
    }

    /// - topics - `["update_collateral_ratio", admin: Address]`
    /// - data - `min_collateral_ratio_bps: u32`
    pub fn update_collateral_ratio(e: &Env, admin: Address, min_collateral_ratio_bps: u32) {
        let topics = (Symbol::new(e, "update_collateral_ratio"), admin);
        e.events().publish(topics, min_collateral_ratio_bps);
    }

    pub fn update_paused_operations(e: &Env, admin: Address, paused_operations: Vec<Operation>) {
        let topics = (Symbol::new(e, "update_paused_operations"), admin);
        e.events().publish(topics, paused_operations);
    }

    pub fn update_price_feeds(e: &Env, admin: Address, feeds: PriceFeeds) {
        let topics = (Symbol::new(e, "update_price_feeds"), admin);
        e.events().publish(topics, feeds);
    }

    pub fn update_max_price_age(e: &Env, admin: Address, max_price_age: u64) {
        let topics = (Symbol::new(e, "update_max_price_age"), admin);
        e.events().publish(topics, max_price_age);
    }

    /// - topics - `["set_admin", admin: Address]`
    /// - data - `new_admin: Address`
    pub fn set_admin(e: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(e, "set_admin"), admin);
        e.events().publish(topics, new_admin);
    }
}
