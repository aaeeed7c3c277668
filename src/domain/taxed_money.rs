// ============================================================================
// Taxed Money Domain Model
// A net/gross pair of Money: the price before and after tax
// ============================================================================

use super::Money;
use crate::currency::Currency;
use crate::numeric::{ensure_same_currency, Decimal, PriceError, PriceResult, Quantization};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A price: net (pre-tax) and gross (payable) amounts in one currency.
///
/// No ordering between net and gross is enforced, so zero and negative
/// taxes are representable. Prices order by gross only, while equality
/// compares both components.
///
/// The `*` operator panics if either product overflows; use
/// [`checked_mul`](TaxedMoney::checked_mul) for untrusted factors.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxedMoney {
    net: Money,
    gross: Money,
}

impl TaxedMoney {
    /// Create from net and gross amounts.
    ///
    /// # Errors
    /// Returns `Construction` if net and gross use different currencies.
    pub fn new(net: Money, gross: Money) -> PriceResult<Self> {
        if net.currency() != gross.currency() {
            return Err(PriceError::construction(format!(
                "net and gross must share a currency, got {} and {}",
                net, gross
            )));
        }
        Ok(Self { net, gross })
    }

    /// A price carrying no tax: net == gross.
    pub fn untaxed(money: Money) -> Self {
        Self {
            net: money,
            gross: money,
        }
    }

    /// Pre-tax amount.
    #[inline]
    pub const fn net(&self) -> Money {
        self.net
    }

    /// Post-tax amount.
    #[inline]
    pub const fn gross(&self) -> Money {
        self.gross
    }

    /// Currency shared by net and gross.
    #[inline]
    pub const fn currency(&self) -> Currency {
        self.net.currency()
    }

    /// Tax amount: `gross - net`.
    pub fn tax(&self) -> PriceResult<Money> {
        self.gross.checked_sub(&self.net)
    }

    // ========================================================================
    // Comparison (by gross)
    // ========================================================================

    /// Order two prices by gross amount.
    pub fn try_cmp(&self, other: &TaxedMoney) -> PriceResult<Ordering> {
        self.gross.try_cmp(&other.gross)
    }

    /// `self < other` by gross
    pub fn try_lt(&self, other: &TaxedMoney) -> PriceResult<bool> {
        self.gross.try_lt(&other.gross)
    }

    /// `self > other` by gross
    pub fn try_gt(&self, other: &TaxedMoney) -> PriceResult<bool> {
        self.gross.try_gt(&other.gross)
    }

    /// `self <= other`: equal prices, or strictly lower gross.
    ///
    /// Two prices with equal gross but different net are neither `<=` nor
    /// `>=` each other.
    pub fn try_le(&self, other: &TaxedMoney) -> PriceResult<bool> {
        if self == other {
            return Ok(true);
        }
        self.try_lt(other)
    }

    /// `self >= other`: equal prices, or strictly higher gross.
    pub fn try_ge(&self, other: &TaxedMoney) -> PriceResult<bool> {
        if self == other {
            return Ok(true);
        }
        self.try_gt(other)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Component-wise sum.
    pub fn checked_add(&self, other: &TaxedMoney) -> PriceResult<Self> {
        ensure_same_currency("add", self.currency(), other.currency())?;
        Ok(Self {
            net: self.net.checked_add(&other.net)?,
            gross: self.gross.checked_add(&other.gross)?,
        })
    }

    /// Component-wise difference.
    pub fn checked_sub(&self, other: &TaxedMoney) -> PriceResult<Self> {
        ensure_same_currency("subtract", self.currency(), other.currency())?;
        Ok(Self {
            net: self.net.checked_sub(&other.net)?,
            gross: self.gross.checked_sub(&other.gross)?,
        })
    }

    /// Add a flat amount to both net and gross.
    pub fn checked_add_money(&self, money: &Money) -> PriceResult<Self> {
        Ok(Self {
            net: self.net.checked_add(money)?,
            gross: self.gross.checked_add(money)?,
        })
    }

    /// Subtract a flat amount from both net and gross.
    pub fn checked_sub_money(&self, money: &Money) -> PriceResult<Self> {
        Ok(Self {
            net: self.net.checked_sub(money)?,
            gross: self.gross.checked_sub(money)?,
        })
    }

    /// Scale net and gross by the same factor.
    pub fn checked_mul<K: Into<Decimal>>(&self, factor: K) -> PriceResult<Self> {
        let factor = factor.into();
        Ok(Self {
            net: self.net.checked_mul(factor)?,
            gross: self.gross.checked_mul(factor)?,
        })
    }

    /// Divide net and gross by the same divisor.
    pub fn checked_div<K: Into<Decimal>>(&self, divisor: K) -> PriceResult<Self> {
        let divisor = divisor.into();
        Ok(Self {
            net: self.net.checked_div(divisor)?,
            gross: self.gross.checked_div(divisor)?,
        })
    }

    // ========================================================================
    // Quantization
    // ========================================================================

    /// Quantize net and gross to the currency's digits (round-half-up).
    pub fn quantize(&self) -> Self {
        self.quantize_with(Quantization::default())
    }

    /// Quantize net and gross independently with the same rule.
    pub fn quantize_with(&self, quantization: Quantization) -> Self {
        Self {
            net: self.net.quantize_with(quantization),
            gross: self.gross.quantize_with(quantization),
        }
    }
}

// Infallible scalar Mul for ergonomics (panics on overflow - use checked_mul in production)
impl Mul<Decimal> for TaxedMoney {
    type Output = TaxedMoney;

    #[inline]
    fn mul(self, rhs: Decimal) -> Self::Output {
        self.checked_mul(rhs)
            .expect("TaxedMoney multiplication overflow")
    }
}

impl Mul<TaxedMoney> for Decimal {
    type Output = TaxedMoney;

    #[inline]
    fn mul(self, rhs: TaxedMoney) -> Self::Output {
        rhs * self
    }
}

impl fmt::Display for TaxedMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaxedMoney(net={}, gross={})", self.net, self.gross)
    }
}

impl fmt::Debug for TaxedMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
