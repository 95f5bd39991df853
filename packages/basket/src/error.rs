use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    OperationPaused = 4,
    // Validation
    ZeroCollateral = 10,
    ZeroAmount = 11,
    InsufficientBalance = 12,
    InvalidComposition = 13,
    FeeTooHigh = 14,
    CollateralRatioTooLow = 15,
    InvalidDecimals = 16,
    // Computation
    PrecisionLoss = 20,
    MathError = 21,
    CastingFailure = 22,
    // Resources
    InsufficientPoolCollateral = 30,
    TransferFailed = 31,
    // Oracle
    OracleUnavailable = 40,
    InvalidPrice = 41,
    StalePrice = 42,
}

pub type BasketResult<T = ()> = core::result::Result<T, ErrorCode>;
