use basket::{
    error::{ BasketResult, ErrorCode },
    ledger::UnitLedgerClient,
    math::{ bn::U256, casting::Cast, safe_math::SafeMath },
    safe_increment,
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::{
    controller::valuation::{ collateral_price, pool_collateral, value_per_unit },
    math::valuation::{ calculate_redeem, from_standard_precision },
    msg::RedeemQuote,
    storage::{ Config, Operation, VaultState },
};

/// Price a redemption of `units` without touching state
pub fn quote_redeem(
    env: &Env,
    config: &Config,
    state: &VaultState,
    units: i128
) -> BasketResult<RedeemQuote> {
    validate!(env, units > 0, ErrorCode::ZeroAmount, "Units must be positive: {}", units)?;

    let unit_value = value_per_unit(env, config, state)?;
    let price = collateral_price(env, config)?;

    let amounts = calculate_redeem(
        env,
        U256::from(units.cast::<u128>(env)?),
        price,
        unit_value,
        config.fees.burn_fee_bps
    )?;
    let collateral = from_standard_precision(
        env,
        amounts.collateral,
        config.collateral_decimals
    )?.try_to_i128(env)?;

    let pool = pool_collateral(env, config);
    validate!(
        env,
        pool >= collateral,
        ErrorCode::InsufficientPoolCollateral,
        "Pool holds {} but redemption needs {}",
        pool,
        collateral
    )?;

    Ok(RedeemQuote {
        units,
        gross_value: amounts.gross_value.to_soroban(env),
        net_value: amounts.net_value.to_soroban(env),
        value_per_unit: unit_value.to_soroban(env),
        collateral,
    })
}

/// Price a redemption and debit its gross value from the aggregate
pub fn redeem(
    env: &Env,
    config: &Config,
    mut state: VaultState,
    redeemer: &Address,
    units: i128
) -> BasketResult<(VaultState, RedeemQuote)> {
    validate!(
        env,
        !config.is_operation_paused(Operation::Redeem),
        ErrorCode::OperationPaused,
        "Basket Vault: Redeem is paused"
    )?;
    validate!(env, units > 0, ErrorCode::ZeroAmount, "Units must be positive: {}", units)?;

    let balance = UnitLedgerClient::new(env, &config.unit_token).balance(redeemer);
    validate!(
        env,
        balance >= units,
        ErrorCode::InsufficientBalance,
        "Balance {} below redemption {}",
        balance,
        units
    )?;

    let quote = quote_redeem(env, config, &state, units)?;

    let aggregate = U256::from_soroban(&state.aggregate_value).safe_sub(
        U256::from_soroban(&quote.gross_value),
        env
    )?;
    state.aggregate_value = aggregate.to_soroban(env);
    safe_increment!(env, state.total_redeemed, units);

    Ok((state, quote))
}
