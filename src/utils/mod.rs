// ============================================================================
// Utilities Module
// Helper functions over collections of priced values
// ============================================================================

mod sum;

pub use sum::{sum, Summable};
