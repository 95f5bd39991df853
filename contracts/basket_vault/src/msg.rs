use soroban_sdk::{ contracttype, U256 };

/// Outcome of converting collateral into units. Values are extended precision (10^27).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssueQuote {
    /// Collateral in the collateral token's native decimals
    pub collateral: i128,
    pub gross_value: U256,
    pub net_value: U256,
    pub value_per_unit: U256,
    pub units: i128,
}

/// Outcome of converting units back into collateral. Values are extended precision (10^27).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedeemQuote {
    pub units: i128,
    pub gross_value: U256,
    pub net_value: U256,
    pub value_per_unit: U256,
    /// Collateral paid out, in the collateral token's native decimals
    pub collateral: i128,
}
