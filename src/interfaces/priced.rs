// ============================================================================
// Priced Values
// Sum type over the four value kinds with named, dynamically dispatched
// operations (add, sub, mul, div, compare, contains)
// ============================================================================

use crate::currency::Currency;
use crate::domain::{Money, MoneyRange, TaxedMoney, TaxedMoneyRange};
use crate::numeric::{Decimal, PriceError, PriceResult, Quantization};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any of the four currency-bearing value kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Priced {
    Money(Money),
    MoneyRange(MoneyRange),
    TaxedMoney(TaxedMoney),
    TaxedMoneyRange(TaxedMoneyRange),
}

/// Right-hand side of a dynamic operation: a priced value or a bare scalar.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operand {
    /// Dimensionless decimal (multipliers, divisors, ratios)
    Scalar(Decimal),
    Priced(Priced),
}

impl Priced {
    /// Name of the value kind, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Priced::Money(_) => "Money",
            Priced::MoneyRange(_) => "MoneyRange",
            Priced::TaxedMoney(_) => "TaxedMoney",
            Priced::TaxedMoneyRange(_) => "TaxedMoneyRange",
        }
    }

    pub const fn currency(&self) -> Currency {
        match self {
            Priced::Money(value) => value.currency(),
            Priced::MoneyRange(value) => value.currency(),
            Priced::TaxedMoney(value) => value.currency(),
            Priced::TaxedMoneyRange(value) => value.currency(),
        }
    }

    pub const fn is_range(&self) -> bool {
        matches!(self, Priced::MoneyRange(_) | Priced::TaxedMoneyRange(_))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// `self + rhs`
    ///
    /// # Errors
    /// `UnsupportedOperand` for combinations without an addition rule,
    /// `CurrencyMismatch` for differing currencies.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: &Operand) -> PriceResult<Priced> {
        let unsupported = || PriceError::unsupported("add", self.kind(), rhs.kind());
        let Operand::Priced(other) = rhs else {
            return Err(unsupported());
        };
        match (self, other) {
            (Priced::Money(a), Priced::Money(b)) => a.checked_add(b).map(Priced::from),
            (Priced::MoneyRange(a), Priced::Money(b)) => a.checked_add_money(b).map(Priced::from),
            (Priced::MoneyRange(a), Priced::MoneyRange(b)) => a.checked_add(b).map(Priced::from),
            (Priced::TaxedMoney(a), Priced::Money(b)) => a.checked_add_money(b).map(Priced::from),
            (Priced::TaxedMoney(a), Priced::TaxedMoney(b)) => a.checked_add(b).map(Priced::from),
            (Priced::TaxedMoneyRange(a), Priced::Money(b)) => {
                a.checked_add_money(b).map(Priced::from)
            },
            (Priced::TaxedMoneyRange(a), Priced::MoneyRange(b)) => {
                a.checked_add_money_range(b).map(Priced::from)
            },
            (Priced::TaxedMoneyRange(a), Priced::TaxedMoney(b)) => {
                a.checked_add_taxed(b).map(Priced::from)
            },
            (Priced::TaxedMoneyRange(a), Priced::TaxedMoneyRange(b)) => {
                a.checked_add(b).map(Priced::from)
            },
            _ => Err(unsupported()),
        }
    }

    /// `self - rhs`
    ///
    /// # Errors
    /// `UnsupportedOperand` for combinations without a subtraction rule,
    /// `CurrencyMismatch` for differing currencies.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, rhs: &Operand) -> PriceResult<Priced> {
        let unsupported = || PriceError::unsupported("subtract", self.kind(), rhs.kind());
        let Operand::Priced(other) = rhs else {
            return Err(unsupported());
        };
        match (self, other) {
            (Priced::Money(a), Priced::Money(b)) => a.checked_sub(b).map(Priced::from),
            (Priced::MoneyRange(a), Priced::Money(b)) => a.checked_sub_money(b).map(Priced::from),
            (Priced::MoneyRange(a), Priced::MoneyRange(b)) => a.checked_sub(b).map(Priced::from),
            (Priced::TaxedMoney(a), Priced::Money(b)) => a.checked_sub_money(b).map(Priced::from),
            (Priced::TaxedMoney(a), Priced::TaxedMoney(b)) => a.checked_sub(b).map(Priced::from),
            (Priced::TaxedMoneyRange(a), Priced::Money(b)) => {
                a.checked_sub_money(b).map(Priced::from)
            },
            (Priced::TaxedMoneyRange(a), Priced::MoneyRange(b)) => {
                a.checked_sub_money_range(b).map(Priced::from)
            },
            (Priced::TaxedMoneyRange(a), Priced::TaxedMoney(b)) => {
                a.checked_sub_taxed(b).map(Priced::from)
            },
            (Priced::TaxedMoneyRange(a), Priced::TaxedMoneyRange(b)) => {
                a.checked_sub(b).map(Priced::from)
            },
            _ => Err(unsupported()),
        }
    }

    /// `self * rhs`; only `Money` and `TaxedMoney` scale, and only by a scalar.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, rhs: &Operand) -> PriceResult<Priced> {
        match (self, rhs) {
            (Priced::Money(a), Operand::Scalar(k)) => a.checked_mul(*k).map(Priced::from),
            (Priced::TaxedMoney(a), Operand::Scalar(k)) => a.checked_mul(*k).map(Priced::from),
            _ => Err(PriceError::unsupported("multiply", self.kind(), rhs.kind())),
        }
    }

    /// `self / rhs`
    ///
    /// `Money / Money` of one currency yields a scalar ratio; dividing by a
    /// scalar keeps the value kind.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, rhs: &Operand) -> PriceResult<Operand> {
        match (self, rhs) {
            (Priced::Money(a), Operand::Scalar(k)) => a.checked_div(*k).map(Operand::from),
            (Priced::Money(a), Operand::Priced(Priced::Money(b))) => {
                a.ratio(b).map(Operand::Scalar)
            },
            (Priced::TaxedMoney(a), Operand::Scalar(k)) => a.checked_div(*k).map(Operand::from),
            _ => Err(PriceError::unsupported("divide", self.kind(), rhs.kind())),
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// `self < rhs`; only `Money`/`Money` and `TaxedMoney`/`TaxedMoney` order.
    pub fn lt(&self, rhs: &Operand) -> PriceResult<bool> {
        match (self, rhs) {
            (Priced::Money(a), Operand::Priced(Priced::Money(b))) => a.try_lt(b),
            (Priced::TaxedMoney(a), Operand::Priced(Priced::TaxedMoney(b))) => a.try_lt(b),
            _ => Err(PriceError::unsupported("compare", self.kind(), rhs.kind())),
        }
    }

    /// `self > rhs`
    pub fn gt(&self, rhs: &Operand) -> PriceResult<bool> {
        match (self, rhs) {
            (Priced::Money(a), Operand::Priced(Priced::Money(b))) => a.try_gt(b),
            (Priced::TaxedMoney(a), Operand::Priced(Priced::TaxedMoney(b))) => a.try_gt(b),
            _ => Err(PriceError::unsupported("compare", self.kind(), rhs.kind())),
        }
    }

    /// `self <= rhs`; equality short-circuits only between orderable kinds.
    pub fn le(&self, rhs: &Operand) -> PriceResult<bool> {
        match (self, rhs) {
            (Priced::Money(a), Operand::Priced(Priced::Money(b))) => a.try_le(b),
            (Priced::TaxedMoney(a), Operand::Priced(Priced::TaxedMoney(b))) => a.try_le(b),
            _ => Err(PriceError::unsupported("compare", self.kind(), rhs.kind())),
        }
    }

    /// `self >= rhs`; equality short-circuits only between orderable kinds.
    pub fn ge(&self, rhs: &Operand) -> PriceResult<bool> {
        match (self, rhs) {
            (Priced::Money(a), Operand::Priced(Priced::Money(b))) => a.try_ge(b),
            (Priced::TaxedMoney(a), Operand::Priced(Priced::TaxedMoney(b))) => a.try_ge(b),
            _ => Err(PriceError::unsupported("compare", self.kind(), rhs.kind())),
        }
    }

    /// Range membership.
    ///
    /// # Errors
    /// `TypeMismatch` when the item is not the range's bound kind,
    /// `UnsupportedOperand` when `self` is not a range.
    pub fn contains(&self, item: &Operand) -> PriceResult<bool> {
        match (self, item) {
            (Priced::MoneyRange(range), Operand::Priced(Priced::Money(money))) => {
                range.contains(money)
            },
            (Priced::MoneyRange(_), _) => Err(PriceError::TypeMismatch {
                expected: "Money",
                found: item.kind(),
            }),
            (Priced::TaxedMoneyRange(range), Operand::Priced(Priced::TaxedMoney(price))) => {
                range.contains(price)
            },
            (Priced::TaxedMoneyRange(_), _) => Err(PriceError::TypeMismatch {
                expected: "TaxedMoney",
                found: item.kind(),
            }),
            _ => Err(PriceError::unsupported("contains", self.kind(), item.kind())),
        }
    }

    // ========================================================================
    // Quantization
    // ========================================================================

    pub fn quantize(&self) -> Priced {
        self.quantize_with(Quantization::default())
    }

    pub fn quantize_with(&self, quantization: Quantization) -> Priced {
        match self {
            Priced::Money(value) => value.quantize_with(quantization).into(),
            Priced::MoneyRange(value) => value.quantize_with(quantization).into(),
            Priced::TaxedMoney(value) => value.quantize_with(quantization).into(),
            Priced::TaxedMoneyRange(value) => value.quantize_with(quantization).into(),
        }
    }
}

impl Operand {
    /// Name of the operand kind, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Priced(priced) => priced.kind(),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_priced_conversions {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Priced {
                fn from(value: $variant) -> Self {
                    Priced::$variant(value)
                }
            }

            impl From<$variant> for Operand {
                fn from(value: $variant) -> Self {
                    Operand::Priced(Priced::$variant(value))
                }
            }

            impl TryFrom<Priced> for $variant {
                type Error = PriceError;

                fn try_from(value: Priced) -> Result<Self, Self::Error> {
                    match value {
                        Priced::$variant(inner) => Ok(inner),
                        other => Err(PriceError::TypeMismatch {
                            expected: stringify!($variant),
                            found: other.kind(),
                        }),
                    }
                }
            }
        )+
    };
}

impl_priced_conversions!(Money, MoneyRange, TaxedMoney, TaxedMoneyRange);

impl From<Priced> for Operand {
    fn from(value: Priced) -> Self {
        Operand::Priced(value)
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Scalar(Decimal::from(value))
    }
}

/// Build a price from dynamically typed components.
impl TryFrom<(Priced, Priced)> for TaxedMoney {
    type Error = PriceError;

    fn try_from((net, gross): (Priced, Priced)) -> Result<Self, Self::Error> {
        match (net, gross) {
            (Priced::Money(net), Priced::Money(gross)) => TaxedMoney::new(net, gross),
            (net, gross) => Err(PriceError::construction(format!(
                "TaxedMoney requires two Money values, got {} and {}",
                net.kind(),
                gross.kind()
            ))),
        }
    }
}

impl TryFrom<(Priced, Priced)> for MoneyRange {
    type Error = PriceError;

    fn try_from((start, stop): (Priced, Priced)) -> Result<Self, Self::Error> {
        match (start, stop) {
            (Priced::Money(start), Priced::Money(stop)) => MoneyRange::new(start, stop),
            (start, stop) => Err(PriceError::construction(format!(
                "MoneyRange requires two Money bounds, got {} and {}",
                start.kind(),
                stop.kind()
            ))),
        }
    }
}

impl TryFrom<(Priced, Priced)> for TaxedMoneyRange {
    type Error = PriceError;

    fn try_from((start, stop): (Priced, Priced)) -> Result<Self, Self::Error> {
        match (start, stop) {
            (Priced::TaxedMoney(start), Priced::TaxedMoney(stop)) => {
                TaxedMoneyRange::new(start, stop)
            },
            (start, stop) => Err(PriceError::construction(format!(
                "TaxedMoneyRange requires two TaxedMoney bounds, got {} and {}",
                start.kind(),
                stop.kind()
            ))),
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Priced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priced::Money(value) => fmt::Display::fmt(value, f),
            Priced::MoneyRange(value) => fmt::Display::fmt(value, f),
            Priced::TaxedMoney(value) => fmt::Display::fmt(value, f),
            Priced::TaxedMoneyRange(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl fmt::Debug for Priced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(value) => write!(f, "{}", value),
            Operand::Priced(priced) => fmt::Display::fmt(priced, f),
        }
    }
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
