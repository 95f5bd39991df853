use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Errors {
    #[doc = "No price has been published yet"]
    NoPrice = 1,
    #[doc = "Feed decimals must fit extended precision"]
    InvalidDecimals = 2,
}
