// SPDX-License-Identifier: MIT
// Constants for sqrt price encoding
//
// Big constants that do not fit a primitive are published as little-endian
// base-2^32 digits together with a constructor returning a `BigUint`.

use num_bigint::BigUint;
use num_traits::One;

// ============================================================
// ROOT SOLVER
// ============================================================

/// Root degree used when none is given (square root)
pub const DEFAULT_ROOT_DEGREE: u32 = 2;

// ============================================================
// DECIMAL SCALING
// ============================================================

/// Smallest-unit scaling of the base token (18 decimals)
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// sqrt(UNIT), removes the decimal scale after taking the square root
pub const SQRT_UNIT: u128 = 1_000_000_000;

// ============================================================
// FIXED POINT (Q64.96)
// ============================================================

/// Q96 multiplier (2^96), sqrt price 1.0 in Q64.96 format
pub const Q96: u128 = 1 << 96;

/// Bit offset of a Q64.96 ratio before the square root is taken
pub const Q192_SHIFT: usize = 192;

/// 2^192 as a big integer
pub fn q192() -> BigUint {
    BigUint::one() << Q192_SHIFT
}

// ============================================================
// SQRT PRICE BOUNDS
// ============================================================

/// Minimum sqrt price accepted by the pool's `initialize`
/// sqrt(1.0001^-887272) * 2^96
pub const MIN_SQRT_RATIO: u64 = 4295128739;

/// Maximum sqrt price accepted by the pool's `initialize`
/// sqrt(1.0001^887272) * 2^96
/// = 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_RATIO: [u32; 5] = [
    0x63988d26, 0x5d951d52, 0x50648849, 0xefd1fc6a, 0xfffd8963,
];

pub fn min_sqrt_ratio() -> BigUint {
    BigUint::from(MIN_SQRT_RATIO)
}

pub fn max_sqrt_ratio() -> BigUint {
    BigUint::from_slice(&MAX_SQRT_RATIO)
}
