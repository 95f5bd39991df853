use basket::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ BasketResult, ErrorCode },
};
use soroban_sdk::{ contracttype, log, Address, Env, Vec, U256 };

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Admin = 1,
    Initialized = 2,
    Config = 3,
    State = 4,
}

// ################################################################
//                             CONFIG
// ################################################################

#[contracttype]
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum Operation {
    Issue,
    Redeem,
}

/// Basket composition in basis points; always sums to 10_000
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BasketWeights {
    pub gold_bps: u32,
    pub bitcoin_bps: u32,
    pub dollar_bps: u32,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    pub mint_fee_bps: u32,
    pub burn_fee_bps: u32,
}

/// USD price feeds, one per basket asset plus the collateral
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceFeeds {
    pub gold: Address,
    pub bitcoin: Address,
    pub dollar: Address,
    pub collateral: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token deposited to issue units (native XLM through its asset contract)
    pub collateral_token: Address,
    /// Decimals of the collateral token, read once at initialization
    pub collateral_decimals: u32,
    /// Ledger of issued units; the vault is its admin
    pub unit_token: Address,
    pub feeds: PriceFeeds,
    pub weights: BasketWeights,
    pub fees: FeeConfig,
    /// Stored and reported, not enforced on issue or redeem
    pub min_collateral_ratio_bps: u32,
    /// Maximum accepted oracle age in seconds, zero disables the check
    pub max_price_age: u64,
    pub paused_operations: Vec<Operation>,
}

impl Config {
    pub fn is_operation_paused(&self, operation: Operation) -> bool {
        self.paused_operations.contains(operation)
    }
}

pub fn get_config(env: &Env) -> BasketResult<Config> {
    let key = DataKey::Config;
    let config = match env.storage().persistent().get(&key) {
        Some(config) => config,
        None => {
            log!(env, "Basket Vault: Config not set");
            return Err(ErrorCode::NotInitialized);
        }
    };
    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(config)
}

pub fn save_config(env: &Env, config: &Config) {
    let key = DataKey::Config;
    env.storage().persistent().set(&key, config);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                             STATE
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultState {
    /// USD value backing all outstanding units, extended precision (10^27)
    pub aggregate_value: U256,
    /// Units ever issued
    pub total_issued: i128,
    /// Units ever redeemed
    pub total_redeemed: i128,
}

impl VaultState {
    pub fn new(env: &Env) -> Self {
        VaultState {
            aggregate_value: U256::from_u32(env, 0),
            total_issued: 0,
            total_redeemed: 0,
        }
    }
}

pub fn get_state(env: &Env) -> BasketResult<VaultState> {
    let key = DataKey::State;
    let state = match env.storage().persistent().get(&key) {
        Some(state) => state,
        None => {
            log!(env, "Basket Vault: State not set");
            return Err(ErrorCode::NotInitialized);
        }
    };
    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(state)
}

pub fn save_state(env: &Env, state: &VaultState) {
    let key = DataKey::State;
    env.storage().persistent().set(&key, state);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                             ADMIN
// ################################################################

pub fn get_admin(env: &Env) -> BasketResult<Address> {
    match env.storage().instance().get(&DataKey::Admin) {
        Some(admin) => Ok(admin),
        None => {
            log!(env, "Basket Vault: Admin not set");
            Err(ErrorCode::NotInitialized)
        }
    }
}

pub fn save_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
