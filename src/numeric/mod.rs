// ============================================================================
// Numeric Module
// Exact decimal arithmetic support for monetary calculations
// ============================================================================
//
// This module provides:
// - PriceError / PriceResult: Error taxonomy for every price operation
// - Quantization: Rounding configuration (places + rounding mode)
// - Checked decimal helpers used by the value types
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Rounding only happens on explicit quantization

mod errors;
mod quantize;

pub use errors::{ErrorKind, PriceError, PriceResult};
pub use quantize::{quantize_decimal, Quantization, MAX_PLACES, ROUND_DOWN, ROUND_HALF_UP};

pub(crate) use errors::ensure_same_currency;
pub(crate) use quantize::{checked_add, checked_div, checked_mul, checked_sub};

pub use rust_decimal::{Decimal, RoundingStrategy};
