// ============================================================================
// Quantization
// Rounding configuration and checked decimal helpers
// ============================================================================

use super::errors::{PriceError, PriceResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Round-half-up: ties round away from zero.
pub const ROUND_HALF_UP: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Round-down: truncate toward zero.
pub const ROUND_DOWN: RoundingStrategy = RoundingStrategy::ToZero;

/// Largest scale a `Decimal` can carry.
pub const MAX_PLACES: u32 = 28;

/// Configuration for rounding an amount to a fixed number of places.
///
/// With no explicit `places`, the amount's currency decides via the
/// currency-fraction table.
///
/// # Example
/// ```
/// use prices::numeric::{Quantization, ROUND_DOWN};
///
/// let q = Quantization::currency_default()
///     .with_places(1)
///     .with_rounding(ROUND_DOWN);
/// assert_eq!(q.places, Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantization {
    /// Decimal places to keep; `None` means "use the currency's digits"
    pub places: Option<u32>,

    /// Rounding mode applied when digits are dropped
    pub rounding: RoundingStrategy,
}

impl Quantization {
    /// Currency digits, round-half-up.
    pub const fn currency_default() -> Self {
        Self {
            places: None,
            rounding: ROUND_HALF_UP,
        }
    }

    /// Builder method: Set explicit decimal places
    ///
    /// Values above [`MAX_PLACES`] are clamped to it.
    pub const fn with_places(mut self, places: u32) -> Self {
        self.places = Some(if places > MAX_PLACES { MAX_PLACES } else { places });
        self
    }

    /// Builder method: Set rounding mode
    pub const fn with_rounding(mut self, rounding: RoundingStrategy) -> Self {
        self.rounding = rounding;
        self
    }

    /// Resolve the places for an amount whose currency has `currency_digits`.
    #[inline]
    pub fn resolve_places(&self, currency_digits: u32) -> u32 {
        self.places.unwrap_or(currency_digits).min(MAX_PLACES)
    }
}

impl Default for Quantization {
    fn default() -> Self {
        Self::currency_default()
    }
}

/// Round `value` to exactly `places` fractional digits.
///
/// Unlike `round_dp_with_strategy` alone, the result is padded so its scale
/// equals `places` ("1" at two places becomes "1.00").
///
/// Padding is best effort: `places` is capped at [`MAX_PLACES`], and an
/// amount whose 96-bit mantissa cannot hold the extra zeros keeps the
/// largest scale that fits. The numeric value is never changed by padding.
pub fn quantize_decimal(value: Decimal, places: u32, rounding: RoundingStrategy) -> Decimal {
    let places = places.min(MAX_PLACES);
    let mut rounded = value.round_dp_with_strategy(places, rounding);
    rounded.rescale(places);
    rounded
}

// ============================================================================
// Checked Arithmetic
// ============================================================================

#[inline]
pub(crate) fn checked_add(lhs: Decimal, rhs: Decimal) -> PriceResult<Decimal> {
    lhs.checked_add(rhs).ok_or(PriceError::Overflow)
}

#[inline]
pub(crate) fn checked_sub(lhs: Decimal, rhs: Decimal) -> PriceResult<Decimal> {
    lhs.checked_sub(rhs).ok_or(PriceError::Overflow)
}

#[inline]
pub(crate) fn checked_mul(lhs: Decimal, rhs: Decimal) -> PriceResult<Decimal> {
    lhs.checked_mul(rhs).ok_or(PriceError::Overflow)
}

#[inline]
pub(crate) fn checked_div(lhs: Decimal, rhs: Decimal) -> PriceResult<Decimal> {
    if rhs.is_zero() {
        return Err(PriceError::DivisionByZero);
    }
    lhs.checked_div(rhs).ok_or(PriceError::Overflow)
}
