// ################################################################
//                             TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ################################################################
//                           PRECISION
// ################################################################

pub const STANDARD_PRECISION_DECIMALS: u32 = 18;
pub const STANDARD_PRECISION: u128 = 1_000_000_000_000_000_000; // expo = -18

pub const EXTENDED_PRECISION_DECIMALS: u32 = 27;
pub const EXTENDED_PRECISION: u128 = 1_000_000_000_000_000_000_000_000_000; // expo = -27

/// Decimals reported by Chainlink-style USD feeds
pub const FEED_DECIMALS: u32 = 8;

// ################################################################
//                         BASIS POINTS
// ################################################################

pub const BPS_DENOMINATOR: u32 = 10_000;
pub const MAX_FEE_BPS: u32 = 500;
pub const MIN_COLLATERAL_RATIO_BPS: u32 = 10_000;

/// Minimum share of the net value an issuance must retain after unit rounding
pub const PRECISION_GUARD_BPS: u32 = 9_900;
