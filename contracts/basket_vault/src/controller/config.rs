use basket::{
    constants::{ BPS_DENOMINATOR, MAX_FEE_BPS, MIN_COLLATERAL_RATIO_BPS },
    error::{ BasketResult, ErrorCode },
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::storage::{ get_admin, BasketWeights, FeeConfig };

pub fn validate_admin(env: &Env, sender: &Address) -> BasketResult {
    let admin = get_admin(env)?;
    validate!(
        env,
        admin == *sender,
        ErrorCode::NotAuthorized,
        "Basket Vault: Sender is not the admin: {}",
        sender.clone()
    )
}

pub fn validate_weights(env: &Env, weights: &BasketWeights) -> BasketResult {
    let BasketWeights { gold_bps, bitcoin_bps, dollar_bps } = *weights;
    validate!(
        env,
        gold_bps <= BPS_DENOMINATOR &&
            bitcoin_bps <= BPS_DENOMINATOR &&
            dollar_bps <= BPS_DENOMINATOR,
        ErrorCode::InvalidComposition,
        "Weight exceeds 100%"
    )?;
    validate!(
        env,
        gold_bps + bitcoin_bps + dollar_bps == BPS_DENOMINATOR,
        ErrorCode::InvalidComposition,
        "Weights must sum to 100%. gold: {} bitcoin: {} dollar: {}",
        gold_bps,
        bitcoin_bps,
        dollar_bps
    )
}

pub fn validate_fees(env: &Env, fees: &FeeConfig) -> BasketResult {
    validate!(
        env,
        fees.mint_fee_bps <= MAX_FEE_BPS && fees.burn_fee_bps <= MAX_FEE_BPS,
        ErrorCode::FeeTooHigh,
        "Fee exceeds maximum. mint: {} burn: {}",
        fees.mint_fee_bps,
        fees.burn_fee_bps
    )
}

pub fn validate_collateral_ratio(env: &Env, min_collateral_ratio_bps: u32) -> BasketResult {
    validate!(
        env,
        min_collateral_ratio_bps >= MIN_COLLATERAL_RATIO_BPS,
        ErrorCode::CollateralRatioTooLow,
        "Collateral ratio below 100%: {}",
        min_collateral_ratio_bps
    )
}
