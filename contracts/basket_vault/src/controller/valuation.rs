use basket::{
    error::BasketResult,
    ledger::UnitLedgerClient,
    math::{ bn::U256, casting::Cast },
    oracle::read_normalized_price,
};
use soroban_sdk::{ token, Env };

use crate::{
    math::valuation::{
        calculate_basket_value,
        calculate_collateral_ratio,
        calculate_collateral_value,
        calculate_value_per_unit,
        to_standard_precision,
        BasketPrices,
    },
    storage::{ Config, VaultState },
};

pub fn read_basket_prices(env: &Env, config: &Config) -> BasketResult<BasketPrices> {
    Ok(BasketPrices {
        gold: read_normalized_price(env, &config.feeds.gold, config.max_price_age)?,
        bitcoin: read_normalized_price(env, &config.feeds.bitcoin, config.max_price_age)?,
        dollar: read_normalized_price(env, &config.feeds.dollar, config.max_price_age)?,
    })
}

pub fn basket_value(env: &Env, config: &Config) -> BasketResult<U256> {
    let prices = read_basket_prices(env, config)?;
    calculate_basket_value(env, &prices, &config.weights)
}

pub fn collateral_price(env: &Env, config: &Config) -> BasketResult<U256> {
    read_normalized_price(env, &config.feeds.collateral, config.max_price_age)
}

pub fn unit_supply(env: &Env, config: &Config) -> BasketResult<U256> {
    let supply = UnitLedgerClient::new(env, &config.unit_token).total_supply();
    Ok(U256::from(supply.cast::<u128>(env)?))
}

pub fn value_per_unit(env: &Env, config: &Config, state: &VaultState) -> BasketResult<U256> {
    let supply = unit_supply(env, config)?;
    calculate_value_per_unit(env, U256::from_soroban(&state.aggregate_value), supply)
}

/// Collateral held by the vault, native decimals
pub fn pool_collateral(env: &Env, config: &Config) -> i128 {
    token::Client::new(env, &config.collateral_token).balance(&env.current_contract_address())
}

pub fn collateral_ratio(env: &Env, config: &Config, state: &VaultState) -> BasketResult<Option<u128>> {
    let aggregate = U256::from_soroban(&state.aggregate_value);
    if aggregate.is_zero() {
        return Ok(None);
    }

    let pool = pool_collateral(env, config).cast::<u128>(env)?;
    let pool_std = to_standard_precision(env, U256::from(pool), config.collateral_decimals)?;
    let pool_value = calculate_collateral_value(env, pool_std, collateral_price(env, config)?)?;

    match calculate_collateral_ratio(env, pool_value, aggregate)? {
        Some(ratio) => Ok(Some(ratio.try_to_u128(env)?)),
        None => Ok(None),
    }
}
