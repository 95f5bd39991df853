use basket::{
    constants::{ EXTENDED_PRECISION_DECIMALS, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    oracle::PriceObservation,
};
use soroban_sdk::{ contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, String };

use crate::{
    errors::Errors,
    events::PriceFeedEvents,
    storage::{
        get_latest_price,
        read_admin,
        read_decimals,
        read_description,
        save_latest_price,
        write_admin,
        write_decimals,
        write_description,
    },
};

contractmeta!(key = "Description", val = "Push-based USD price feed for basket valuation");

#[contract]
pub struct PriceFeed;

#[contractimpl]
impl PriceFeed {
    pub fn __constructor(env: Env, admin: Address, decimals: u32, description: String) {
        if decimals > EXTENDED_PRECISION_DECIMALS {
            log!(&env, "Price Feed: Constructor: decimals too large", decimals);
            panic_with_error!(&env, Errors::InvalidDecimals);
        }

        write_admin(&env, &admin);
        write_decimals(&env, decimals);
        write_description(&env, &description);
    }

    /// Publish a raw answer. Sign is not checked here; consumers validate it.
    pub fn set_price(env: Env, price: i128) {
        let admin = read_admin(&env);
        admin.require_auth();

        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let timestamp = env.ledger().timestamp();
        save_latest_price(&env, &PriceObservation {
            price,
            decimals: read_decimals(&env),
            timestamp,
        });

        PriceFeedEvents::price(&env, admin, price, timestamp);
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = read_admin(&env);
        admin.require_auth();

        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_admin(&env, &new_admin);
        PriceFeedEvents::set_admin(&env, admin, new_admin);
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    pub fn latest_price(env: Env) -> PriceObservation {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        match get_latest_price(&env) {
            Some(observation) => observation,
            None => {
                log!(&env, "Price Feed: Latest price: no price published yet");
                panic_with_error!(&env, Errors::NoPrice);
            }
        }
    }

    pub fn decimals(env: Env) -> u32 {
        read_decimals(&env)
    }

    pub fn description(env: Env) -> String {
        read_description(&env)
    }

    pub fn admin(env: Env) -> Address {
        read_admin(&env)
    }
}
