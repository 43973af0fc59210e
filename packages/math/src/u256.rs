// SPDX-License-Identifier: MIT
// Conversions between BigUint and the host U256 type

use num_bigint::BigUint;
use soroban_sdk::{Env, U256};

use crate::error::MathError;

const U256_BITS: u64 = 256;

/// Convert to a host U256, failing if the value is wider than 256 bits
pub fn to_u256(env: &Env, value: &BigUint) -> Result<U256, MathError> {
    if value.bits() > U256_BITS {
        return Err(MathError::Overflow);
    }

    // little-endian 64-bit limbs
    let mut limbs = [0u64; 4];
    for (slot, digit) in limbs.iter_mut().zip(value.iter_u64_digits()) {
        *slot = digit;
    }

    Ok(U256::from_parts(env, limbs[3], limbs[2], limbs[1], limbs[0]))
}

/// Convert a host U256 back to BigUint
pub fn from_u256(value: &U256) -> BigUint {
    let mut bytes = [0u8; 32];
    value.to_be_bytes().copy_into_slice(&mut bytes);
    BigUint::from_bytes_be(&bytes)
}
