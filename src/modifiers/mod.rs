// ============================================================================
// Modifiers Module
// Contains the tax and discount implementations
// ============================================================================

mod discount;
mod tax;

pub mod factory;

pub use discount::{percentage_discount, FixedDiscount, FractionalDiscount};
pub use factory::{create_from_config, create_modifier, ModifierChain};
pub use tax::{FlatTax, LinearTax};
