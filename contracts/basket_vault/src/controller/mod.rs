pub mod config;
pub mod issue;
pub mod redeem;
pub mod valuation;
