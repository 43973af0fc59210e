// Events for LionSwap price initialization
// Event names are kept short to reduce storage/gas costs

use soroban_sdk::{Env, Symbol, U256};

/// Emitted when a reserve pair has been encoded into an accepted sqrt price
/// Topics: ("SqrtPriceEncoded",)
/// Data: (reserve1, reserve0, sqrt_price_x96)
pub fn emit_sqrt_price_encoded(env: &Env, reserve1: &U256, reserve0: &U256, sqrt_price_x96: &U256) {
    env.events().publish(
        (Symbol::new(env, "SqrtPriceEncoded"),),
        (reserve1.clone(), reserve0.clone(), sqrt_price_x96.clone()),
    );
}
