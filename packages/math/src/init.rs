// SPDX-License-Identifier: MIT
// Caller-side guard for pool price initialization

use soroban_sdk::{Env, U256};

use crate::error::MathError;
use crate::events::emit_sqrt_price_encoded;
use crate::price::{check_sqrt_price, encode_price_sqrt};
use crate::u256::{from_u256, to_u256};

/// Encode a reserve pair into the sqrt price handed to a pool's `initialize`.
///
/// Fails before anything is published if `reserve0` is zero or the encoded
/// price falls outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO].
pub fn prepare_initial_sqrt_price(
    env: &Env,
    reserve1: &U256,
    reserve0: &U256,
) -> Result<U256, MathError> {
    let sqrt_price = encode_price_sqrt(from_u256(reserve1), from_u256(reserve0))?;
    check_sqrt_price(&sqrt_price)?;

    let sqrt_price = to_u256(env, &sqrt_price)?;
    emit_sqrt_price_encoded(env, reserve1, reserve0, &sqrt_price);

    Ok(sqrt_price)
}
