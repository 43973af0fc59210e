// SPDX-License-Identifier: MIT
// Error module for LionSwap math

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MathError {
    // Input errors (1-3)
    DivisionByZero = 1,
    InvalidRootDegree = 2,
    InvalidAmount = 3,

    // Price bound errors (4-5)
    SqrtPriceTooLow = 4,
    SqrtPriceTooHigh = 5,

    // Conversion errors (6)
    Overflow = 6,
}

/// Human-readable error messages for debugging
pub struct MathErrorMsg;

impl MathErrorMsg {
    pub const DIVISION_BY_ZERO: &'static str = "Math: division by zero (zero reserve or degenerate estimate)";
    pub const INVALID_ROOT_DEGREE: &'static str = "Math: root degree must be at least 1";
    pub const INVALID_AMOUNT: &'static str = "Math: amount must be a non-negative decimal or 0x-hex integer";
    pub const SQRT_PRICE_TOO_LOW: &'static str = "Math: sqrt price below MIN_SQRT_RATIO";
    pub const SQRT_PRICE_TOO_HIGH: &'static str = "Math: sqrt price above MAX_SQRT_RATIO";
    pub const OVERFLOW: &'static str = "Math: value does not fit in 256 bits";
}

impl MathError {
    pub fn message(&self) -> &'static str {
        match self {
            MathError::DivisionByZero => MathErrorMsg::DIVISION_BY_ZERO,
            MathError::InvalidRootDegree => MathErrorMsg::INVALID_ROOT_DEGREE,
            MathError::InvalidAmount => MathErrorMsg::INVALID_AMOUNT,
            MathError::SqrtPriceTooLow => MathErrorMsg::SQRT_PRICE_TOO_LOW,
            MathError::SqrtPriceTooHigh => MathErrorMsg::SQRT_PRICE_TOO_HIGH,
            MathError::Overflow => MathErrorMsg::OVERFLOW,
        }
    }
}

impl core::fmt::Display for MathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
