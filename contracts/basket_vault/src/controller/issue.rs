use basket::{
    error::{ BasketResult, ErrorCode },
    math::{ bn::U256, casting::Cast, safe_math::SafeMath },
    safe_increment,
    validate,
};
use soroban_sdk::Env;

use crate::{
    controller::valuation::{ collateral_price, value_per_unit },
    math::valuation::{ calculate_issue, to_standard_precision },
    msg::IssueQuote,
    storage::{ Config, Operation, VaultState },
};

/// Price an issue of `collateral` (native decimals) without touching state
pub fn quote_issue(
    env: &Env,
    config: &Config,
    state: &VaultState,
    collateral: i128
) -> BasketResult<IssueQuote> {
    validate!(
        env,
        collateral > 0,
        ErrorCode::ZeroCollateral,
        "Collateral must be positive: {}",
        collateral
    )?;

    let collateral_std = to_standard_precision(
        env,
        U256::from(collateral.cast::<u128>(env)?),
        config.collateral_decimals
    )?;
    let price = collateral_price(env, config)?;
    let unit_value = value_per_unit(env, config, state)?;

    let amounts = calculate_issue(
        env,
        collateral_std,
        price,
        unit_value,
        config.fees.mint_fee_bps
    )?;

    Ok(IssueQuote {
        collateral,
        gross_value: amounts.gross_value.to_soroban(env),
        net_value: amounts.net_value.to_soroban(env),
        value_per_unit: unit_value.to_soroban(env),
        units: amounts.units.try_to_i128(env)?,
    })
}

/// Price an issue and credit its net value to the aggregate
pub fn issue(
    env: &Env,
    config: &Config,
    mut state: VaultState,
    collateral: i128
) -> BasketResult<(VaultState, IssueQuote)> {
    validate!(
        env,
        !config.is_operation_paused(Operation::Issue),
        ErrorCode::OperationPaused,
        "Basket Vault: Issue is paused"
    )?;

    let quote = quote_issue(env, config, &state, collateral)?;

    let aggregate = U256::from_soroban(&state.aggregate_value).safe_add(
        U256::from_soroban(&quote.net_value),
        env
    )?;
    state.aggregate_value = aggregate.to_soroban(env);
    safe_increment!(env, state.total_issued, quote.units);

    Ok((state, quote))
}
