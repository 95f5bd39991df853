#![no_std]

mod contract;
mod controller;
mod events;
mod math;
pub mod msg;
pub mod storage;
mod vault;

pub use crate::contract::{ BasketVault, BasketVaultClient };
