#![no_std]

mod contract;
pub mod errors;
mod events;
mod storage;

pub use crate::contract::{ PriceFeed, PriceFeedClient };
