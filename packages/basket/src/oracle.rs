use soroban_sdk::{ contractclient, contracttype, log, Address, Env };

use crate::{
    constants::EXTENDED_PRECISION_DECIMALS,
    error::{ ErrorCode, BasketResult },
    math::{ bn::U256, casting::Cast, safe_math::SafeMath },
    validate,
};

/// A single answer from a price feed, in the feed's native decimals
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceObservation {
    pub price: i128,
    pub decimals: u32,
    /// Ledger timestamp of the last update
    pub timestamp: u64,
}

#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn latest_price(env: Env) -> PriceObservation;
}

/// Rescale a raw feed answer to extended precision (10^27).
///
/// The answer is signed on the wire; zero and negative answers are rejected
/// instead of being reinterpreted as unsigned.
pub fn normalize_price(env: &Env, observation: &PriceObservation) -> BasketResult<U256> {
    validate!(
        env,
        observation.price > 0,
        ErrorCode::InvalidPrice,
        "Oracle price must be positive",
        observation.price
    )?;
    validate!(
        env,
        observation.decimals <= EXTENDED_PRECISION_DECIMALS,
        ErrorCode::InvalidPrice,
        "Oracle decimals exceed extended precision",
        observation.decimals
    )?;

    let raw = observation.price.cast::<u128>(env)?;
    let scale = U256::exp10((EXTENDED_PRECISION_DECIMALS - observation.decimals) as usize);

    U256::from(raw).safe_mul(scale, env)
}

/// Reject observations older than `max_price_age` seconds. Zero disables the check.
pub fn validate_price_age(
    env: &Env,
    observation: &PriceObservation,
    now: u64,
    max_price_age: u64
) -> BasketResult {
    if max_price_age == 0 {
        return Ok(());
    }

    let age = now.saturating_sub(observation.timestamp);
    validate!(
        env,
        age <= max_price_age,
        ErrorCode::StalePrice,
        "Oracle price is stale. age: {} max: {}",
        age,
        max_price_age
    )
}

/// Query a feed and return its validated, normalized answer.
pub fn read_normalized_price(env: &Env, feed: &Address, max_price_age: u64) -> BasketResult<U256> {
    let observation = match PriceFeedClient::new(env, feed).try_latest_price() {
        Ok(Ok(observation)) => observation,
        _ => {
            log!(env, "Oracle unavailable: {}", feed.clone());
            return Err(ErrorCode::OracleUnavailable);
        }
    };

    validate_price_age(env, &observation, env.ledger().timestamp(), max_price_age)?;
    normalize_price(env, &observation)
}
