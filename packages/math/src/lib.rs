// LionSwap Math Package

#![no_std]

extern crate alloc;

pub mod constants;
pub mod error;
pub mod events;
pub mod init;
pub mod price;
pub mod root;
pub mod u256;

// Re-export commonly used items from constants
pub use constants::*;

pub use error::{MathError, MathErrorMsg};

// Re-export root solver
pub use root::{root_nth, sqrt, Convergence, Root};

// Re-export price encoding
pub use price::{
    check_sqrt_price,
    encode_price_sqrt,
    encode_sqrt_ratio_x96,
    parse_amount,
};

// Re-export host conversions and the initialization guard
pub use u256::{from_u256, to_u256};
pub use init::prepare_initial_sqrt_price;
pub use events::emit_sqrt_price_encoded;

// Re-export so callers need not depend on num-bigint directly
pub use num_bigint::BigUint;
