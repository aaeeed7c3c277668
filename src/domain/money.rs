// ============================================================================
// Money Domain Model
// A single exact decimal amount tagged with a currency
// ============================================================================

use crate::currency::Currency;
use crate::numeric::{
    checked_add, checked_div, checked_mul, checked_sub, ensure_same_currency, quantize_decimal,
    Decimal, PriceError, PriceResult, Quantization,
};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact decimal amount of a particular currency.
///
/// `Money` is an immutable `Copy` value. Equality is structural and never
/// fails; ordering and arithmetic require both operands to share a currency
/// and report [`PriceError::CurrencyMismatch`] otherwise.
///
/// The `*` operator panics if the product overflows; use
/// [`checked_mul`](Money::checked_mul) for untrusted factors.
///
/// # Example
/// ```
/// use prices::prelude::*;
///
/// let a = Money::from_integer(10, "USD");
/// let b = Money::from_integer(20, "USD");
/// assert_eq!(a.checked_add(&b)?, Money::from_integer(30, "USD"));
/// assert!(a.checked_add(&Money::from_integer(1, "EUR")).is_err());
/// # Ok::<(), prices::numeric::PriceError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an exact decimal amount.
    #[inline]
    pub fn new(amount: Decimal, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Create from a whole number of currency units.
    #[inline]
    pub fn from_integer(amount: i64, currency: impl Into<Currency>) -> Self {
        Self::new(Decimal::from(amount), currency)
    }

    /// Zero in the given currency.
    #[inline]
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Parse a decimal literal such as `"1.01"`.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if the literal is malformed or would need
    /// rounding to fit the decimal representation.
    pub fn parse(amount: &str, currency: impl Into<Currency>) -> PriceResult<Self> {
        let trimmed = amount.trim();
        Decimal::from_str_exact(trimmed)
            .map(|value| Self::new(value, currency))
            .map_err(|_| PriceError::InvalidAmount {
                input: trimmed.to_string(),
            })
    }

    /// Create from a binary float.
    ///
    /// Floats should never carry prices. The value is accepted with a warning
    /// and coerced through its shortest round-trip decimal string, so `0.1`
    /// becomes exactly `0.1` rather than the nearest binary fraction.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for NaN, infinities, and values that do not fit
    /// the decimal range exactly.
    pub fn from_f64(amount: f64, currency: impl Into<Currency>) -> PriceResult<Self> {
        tracing::warn!(amount, "float passed as money amount, consider using Decimal");
        if !amount.is_finite() {
            return Err(PriceError::InvalidAmount {
                input: amount.to_string(),
            });
        }
        Self::parse(&amount.to_string(), currency)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code.
    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Truthiness: a money value is "falsy" iff its amount is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if amount is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Check if amount is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Order two amounts of the same currency.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn try_cmp(&self, other: &Money) -> PriceResult<Ordering> {
        ensure_same_currency("compare", self.currency, other.currency)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// `self < other`
    pub fn try_lt(&self, other: &Money) -> PriceResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    /// `self > other`
    pub fn try_gt(&self, other: &Money) -> PriceResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    /// `self <= other`; structural equality short-circuits before ordering.
    pub fn try_le(&self, other: &Money) -> PriceResult<bool> {
        if self == other {
            return Ok(true);
        }
        self.try_lt(other)
    }

    /// `self >= other`; structural equality short-circuits before ordering.
    pub fn try_ge(&self, other: &Money) -> PriceResult<bool> {
        if self == other {
            return Ok(true);
        }
        self.try_gt(other)
    }

    /// The larger of two same-currency amounts.
    pub fn checked_max(self, other: Money) -> PriceResult<Money> {
        if self.try_lt(&other)? {
            Ok(other)
        } else {
            Ok(self)
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// `CurrencyMismatch` on differing currencies, `Overflow` if the result
    /// leaves the decimal range.
    pub fn checked_add(&self, rhs: &Money) -> PriceResult<Money> {
        ensure_same_currency("add", self.currency, rhs.currency)?;
        Ok(Self::new(checked_add(self.amount, rhs.amount)?, self.currency))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// `CurrencyMismatch` on differing currencies, `Overflow` if the result
    /// leaves the decimal range.
    pub fn checked_sub(&self, rhs: &Money) -> PriceResult<Money> {
        ensure_same_currency("subtract", self.currency, rhs.currency)?;
        Ok(Self::new(checked_sub(self.amount, rhs.amount)?, self.currency))
    }

    /// Multiply by a dimensionless scalar.
    pub fn checked_mul<K: Into<Decimal>>(&self, factor: K) -> PriceResult<Money> {
        Ok(Self::new(
            checked_mul(self.amount, factor.into())?,
            self.currency,
        ))
    }

    /// Divide by a dimensionless scalar.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor.
    pub fn checked_div<K: Into<Decimal>>(&self, divisor: K) -> PriceResult<Money> {
        Ok(Self::new(
            checked_div(self.amount, divisor.into())?,
            self.currency,
        ))
    }

    /// Divide by another amount of the same currency, yielding a plain ratio.
    pub fn ratio(&self, divisor: &Money) -> PriceResult<Decimal> {
        ensure_same_currency("divide", self.currency, divisor.currency)?;
        checked_div(self.amount, divisor.amount)
    }

    // ========================================================================
    // Quantization
    // ========================================================================

    /// Round to the currency's canonical digits using round-half-up.
    pub fn quantize(&self) -> Money {
        self.quantize_with(Quantization::default())
    }

    /// Round using explicit places and/or rounding mode.
    pub fn quantize_with(&self, quantization: Quantization) -> Money {
        let places = quantization.resolve_places(self.currency.digits());
        Self::new(
            quantize_decimal(self.amount, places, quantization.rounding),
            self.currency,
        )
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.amount, self.currency)
    }
}

// Infallible scalar Mul for ergonomics (panics on overflow - use checked_mul in production)
impl Mul<Decimal> for Money {
    type Output = Money;

    #[inline]
    fn mul(self, rhs: Decimal) -> Self::Output {
        self.checked_mul(rhs).expect("Money multiplication overflow")
    }
}

impl Mul<Money> for Decimal {
    type Output = Money;

    #[inline]
    fn mul(self, rhs: Money) -> Self::Output {
        rhs * self
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money('{}', '{}')", self.amount, self.currency)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ============================================================================
// Tests
// ============================================================================
