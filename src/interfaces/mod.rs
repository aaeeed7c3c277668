// ============================================================================
// Interfaces Module
// Contains the dynamic value type and the modifier contracts
// ============================================================================

mod modifier;
mod priced;

pub use modifier::{Modifiable, PriceModifier};
pub use priced::{Operand, Priced};
