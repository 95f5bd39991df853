//! Big number types

#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::manual_div_ceil)]

use soroban_sdk::{ log, Bytes, Env };
use uint::construct_uint;

use crate::error::{ ErrorCode, BasketResult };

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

impl U256 {
    /// Convert to u128, failing when the value does not fit
    pub fn try_to_u128(self, env: &Env) -> BasketResult<u128> {
        if self > U256::from(u128::MAX) {
            log!(env, "U256 to u128 conversion overflow");
            return Err(ErrorCode::CastingFailure);
        }
        Ok(self.low_u128())
    }

    /// Convert to i128, failing when the value does not fit
    pub fn try_to_i128(self, env: &Env) -> BasketResult<i128> {
        if self > U256::from(i128::MAX as u128) {
            log!(env, "U256 to i128 conversion overflow");
            return Err(ErrorCode::CastingFailure);
        }
        Ok(self.low_u128() as i128)
    }

    /// Load from the host `U256` used in contract storage
    pub fn from_soroban(value: &soroban_sdk::U256) -> Self {
        let mut bytes = [0u8; 32];
        value.to_be_bytes().copy_into_slice(&mut bytes);
        U256::from_big_endian(&bytes)
    }

    /// Convert into the host `U256` used in contract storage
    pub fn to_soroban(self, env: &Env) -> soroban_sdk::U256 {
        let mut bytes = [0u8; 32];
        self.to_big_endian(&mut bytes);
        soroban_sdk::U256::from_be_bytes(env, &Bytes::from_array(env, &bytes))
    }
}
