use basket::{
    constants::{
        BPS_DENOMINATOR,
        EXTENDED_PRECISION,
        PRECISION_GUARD_BPS,
        STANDARD_PRECISION,
        STANDARD_PRECISION_DECIMALS,
    },
    error::{ BasketResult, ErrorCode },
    math::{ bn::U256, safe_math::SafeMath },
    validate,
};
use soroban_sdk::Env;

use crate::storage::BasketWeights;

/// Basket asset prices, extended precision (10^27)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BasketPrices {
    pub gold: U256,
    pub bitcoin: U256,
    pub dollar: U256,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IssueAmounts {
    pub gross_value: U256,
    pub net_value: U256,
    /// Units at standard precision (10^18)
    pub units: U256,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RedeemAmounts {
    pub gross_value: U256,
    pub net_value: U256,
    /// Collateral at standard precision (10^18)
    pub collateral: U256,
}

pub fn apply_bps(env: &Env, value: U256, bps: u32) -> BasketResult<U256> {
    value.safe_mul(U256::from(bps), env)?.safe_div(U256::from(BPS_DENOMINATOR), env)
}

/// Value remaining after a basis-point fee, rounded down
pub fn deduct_fee(env: &Env, value: U256, fee_bps: u32) -> BasketResult<U256> {
    apply_bps(env, value, BPS_DENOMINATOR.safe_sub(fee_bps, env)?)
}

/// Weighted USD value of one basket
pub fn calculate_basket_value(
    env: &Env,
    prices: &BasketPrices,
    weights: &BasketWeights
) -> BasketResult<U256> {
    let gold = apply_bps(env, prices.gold, weights.gold_bps)?;
    let bitcoin = apply_bps(env, prices.bitcoin, weights.bitcoin_bps)?;
    let dollar = apply_bps(env, prices.dollar, weights.dollar_bps)?;

    gold.safe_add(bitcoin, env)?.safe_add(dollar, env)
}

/// Value backing one whole unit. Before any unit exists a unit is worth exactly 1.0.
pub fn calculate_value_per_unit(
    env: &Env,
    aggregate_value: U256,
    total_supply: U256
) -> BasketResult<U256> {
    if total_supply.is_zero() {
        return Ok(U256::from(EXTENDED_PRECISION));
    }

    aggregate_value.safe_mul(U256::from(STANDARD_PRECISION), env)?.safe_div(total_supply, env)
}

pub fn calculate_issue(
    env: &Env,
    collateral: U256,
    collateral_price: U256,
    value_per_unit: U256,
    mint_fee_bps: u32
) -> BasketResult<IssueAmounts> {
    let precision = U256::from(STANDARD_PRECISION);

    let gross_value = collateral.safe_mul(collateral_price, env)?.safe_div(precision, env)?;
    let net_value = deduct_fee(env, gross_value, mint_fee_bps)?;
    let units = net_value.safe_mul(precision, env)?.safe_div(value_per_unit, env)?;

    // units * vpu must retain at least 99% of the net value
    let retained = units.safe_mul(value_per_unit, env)?.safe_div(precision, env)?;
    validate!(
        env,
        !units.is_zero() &&
            retained.safe_mul(U256::from(BPS_DENOMINATOR), env)? >=
                net_value.safe_mul(U256::from(PRECISION_GUARD_BPS), env)?,
        ErrorCode::PrecisionLoss,
        "Issue loses too much value to rounding"
    )?;

    Ok(IssueAmounts {
        gross_value,
        net_value,
        units,
    })
}

pub fn calculate_redeem(
    env: &Env,
    units: U256,
    collateral_price: U256,
    value_per_unit: U256,
    burn_fee_bps: u32
) -> BasketResult<RedeemAmounts> {
    let precision = U256::from(STANDARD_PRECISION);

    let gross_value = units.safe_mul(value_per_unit, env)?.safe_div(precision, env)?;
    let net_value = deduct_fee(env, gross_value, burn_fee_bps)?;
    let collateral = net_value.safe_mul(precision, env)?.safe_div(collateral_price, env)?;

    Ok(RedeemAmounts {
        gross_value,
        net_value,
        collateral,
    })
}

/// USD value of collateral held, extended precision
pub fn calculate_collateral_value(
    env: &Env,
    collateral: U256,
    collateral_price: U256
) -> BasketResult<U256> {
    collateral.safe_mul(collateral_price, env)?.safe_div(U256::from(STANDARD_PRECISION), env)
}

/// Collateral value over aggregate value in basis points, `None` while nothing is outstanding
pub fn calculate_collateral_ratio(
    env: &Env,
    collateral_value: U256,
    aggregate_value: U256
) -> BasketResult<Option<U256>> {
    if aggregate_value.is_zero() {
        return Ok(None);
    }

    let ratio = collateral_value
        .safe_mul(U256::from(BPS_DENOMINATOR), env)?
        .safe_div(aggregate_value, env)?;
    Ok(Some(ratio))
}

fn collateral_scale(env: &Env, decimals: u32) -> BasketResult<U256> {
    validate!(
        env,
        decimals <= STANDARD_PRECISION_DECIMALS,
        ErrorCode::InvalidDecimals,
        "Collateral decimals exceed standard precision",
        decimals
    )?;
    Ok(U256::exp10((STANDARD_PRECISION_DECIMALS - decimals) as usize))
}

/// Lift a native collateral amount to standard precision
pub fn to_standard_precision(env: &Env, amount: U256, decimals: u32) -> BasketResult<U256> {
    amount.safe_mul(collateral_scale(env, decimals)?, env)
}

/// Bring a standard precision amount back to native decimals, truncating
pub fn from_standard_precision(env: &Env, amount: U256, decimals: u32) -> BasketResult<U256> {
    amount.safe_div(collateral_scale(env, decimals)?, env)
}
