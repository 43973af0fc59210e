// SPDX-License-Identifier: MIT
// Sqrt price encoding (Q64.96)

use alloc::string::String;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::constants::{max_sqrt_ratio, min_sqrt_ratio, Q192_SHIFT, Q96, SQRT_UNIT, UNIT};
use crate::error::MathError;
use crate::root::sqrt;

/// Encode a reserve pair as a Q64.96 sqrt price: sqrt(reserve1 / reserve0) * 2^96
///
/// The ratio is taken at 18-decimal resolution (`reserve1 * UNIT / reserve0`),
/// square-rooted exactly, scaled by 2^96 and stripped of the decimal scale
/// by dividing through `SQRT_UNIT`. The result is not range checked; see
/// [`check_sqrt_price`].
pub fn encode_price_sqrt(
    reserve1: impl Into<BigUint>,
    reserve0: impl Into<BigUint>,
) -> Result<BigUint, MathError> {
    let reserve1: BigUint = reserve1.into();
    let reserve0: BigUint = reserve0.into();

    if reserve0.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let ratio = reserve1 * UNIT / reserve0;
    let root = sqrt(&ratio)?;

    Ok(root * Q96 / SQRT_UNIT)
}

/// Encode `amount1 / amount0` as a Q64.96 sqrt price without decimal truncation
/// Formula: nearest_sqrt((amount1 << 192) / amount0)
pub fn encode_sqrt_ratio_x96(
    amount1: impl Into<BigUint>,
    amount0: impl Into<BigUint>,
) -> Result<BigUint, MathError> {
    let amount1: BigUint = amount1.into();
    let amount0: BigUint = amount0.into();
    if amount0.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let numerator = amount1 << Q192_SHIFT;
    sqrt(&(numerator / amount0))
}

/// Check a sqrt price against [MIN_SQRT_RATIO, MAX_SQRT_RATIO] (inclusive)
pub fn check_sqrt_price(sqrt_price_x96: &BigUint) -> Result<(), MathError> {
    if *sqrt_price_x96 < min_sqrt_ratio() {
        return Err(MathError::SqrtPriceTooLow);
    }
    if *sqrt_price_x96 > max_sqrt_ratio() {
        return Err(MathError::SqrtPriceTooHigh);
    }
    Ok(())
}

/// Parse a token amount given as text
///
/// Accepts decimal or `0x`-prefixed hex digits, surrounding whitespace and
/// `_` separators between digits. Signs, fractions and empty input fail.
pub fn parse_amount(input: &str) -> Result<BigUint, MathError> {
    let trimmed = input.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };

    if digits.starts_with('_') || digits.ends_with('_') {
        return Err(MathError::InvalidAmount);
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_digit(radix)) {
        return Err(MathError::InvalidAmount);
    }

    BigUint::parse_bytes(cleaned.as_bytes(), radix).ok_or(MathError::InvalidAmount)
}
