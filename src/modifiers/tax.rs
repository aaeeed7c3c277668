// ============================================================================
// Tax Modifiers
// Linear (net-based) and flat (gross-based) taxes over all value kinds
// ============================================================================

use crate::domain::{Money, TaxedMoney, TaxedMoneyRange};
use crate::interfaces::{PriceModifier, Priced};
use crate::numeric::{checked_add, Decimal, PriceResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tax proportional to the net amount.
///
/// Applied to a price, net stays unchanged and `gross' = gross + net * multiplier`.
/// A bare `Money` is treated as an untaxed price, so the result is always a
/// `TaxedMoney` (or a `TaxedMoneyRange` for ranges).
///
/// # Example
/// ```text
/// LinearTax(0.23) on TaxedMoney(net=100, gross=100)
/// Result: TaxedMoney(net=100, gross=123)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearTax {
    multiplier: Decimal,
    name: Option<String>,
}

impl LinearTax {
    pub fn new(multiplier: impl Into<Decimal>) -> Self {
        Self {
            multiplier: multiplier.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub const fn multiplier(&self) -> Decimal {
        self.multiplier
    }

    fn tax_price(&self, price: &TaxedMoney) -> PriceResult<TaxedMoney> {
        let tax = price.net().checked_mul(self.multiplier)?;
        TaxedMoney::new(price.net(), price.gross().checked_add(&tax)?)
    }

    fn tax_money(&self, money: &Money) -> PriceResult<TaxedMoney> {
        self.tax_price(&TaxedMoney::untaxed(*money))
    }
}

impl PriceModifier for LinearTax {
    fn apply(&self, base: &Priced) -> PriceResult<Priced> {
        tracing::debug!(modifier = %self, target = base.kind(), "applying linear tax");

        match base {
            Priced::Money(money) => self.tax_money(money).map(Priced::from),
            Priced::TaxedMoney(price) => self.tax_price(price).map(Priced::from),
            Priced::MoneyRange(range) => TaxedMoneyRange::new(
                self.tax_money(&range.start())?,
                self.tax_money(&range.stop())?,
            )
            .map(Priced::from),
            Priced::TaxedMoneyRange(range) => TaxedMoneyRange::new(
                self.tax_price(&range.start())?,
                self.tax_price(&range.stop())?,
            )
            .map(Priced::from),
        }
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// Ordered by multiplier; equal multipliers with different names are unordered
impl PartialOrd for LinearTax {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.multiplier.cmp(&other.multiplier) {
            Ordering::Equal if self.name != other.name => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for LinearTax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearTax('{}', name=", self.multiplier)?;
        write_name(f, self.name.as_deref())?;
        write!(f, ")")
    }
}

/// Tax computed on the gross amount at a flat rate.
///
/// By default gross is raised to `gross * (1 + rate)`. With
/// [`keep_gross`](FlatTax::keep_gross) the gross stays fixed and the net is
/// derived as `gross / (1 + rate)`, which models tax-inclusive prices.
/// Derived amounts are quantized to the currency's digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlatTax {
    rate: Decimal,
    keep_gross: bool,
    name: Option<String>,
}

impl FlatTax {
    pub fn new(rate: impl Into<Decimal>) -> Self {
        Self {
            rate: rate.into(),
            keep_gross: false,
            name: None,
        }
    }

    /// Treat existing gross amounts as tax-inclusive.
    pub fn keep_gross(mut self) -> Self {
        self.keep_gross = true;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    #[inline]
    pub const fn keeps_gross(&self) -> bool {
        self.keep_gross
    }

    fn tax_price(&self, price: &TaxedMoney) -> PriceResult<TaxedMoney> {
        let factor = checked_add(Decimal::ONE, self.rate)?;
        if self.keep_gross {
            let net = price.gross().checked_div(factor)?.quantize();
            TaxedMoney::new(net, price.gross())
        } else {
            let gross = price.gross().checked_mul(factor)?.quantize();
            TaxedMoney::new(price.net(), gross)
        }
    }

    fn tax_money(&self, money: &Money) -> PriceResult<TaxedMoney> {
        self.tax_price(&TaxedMoney::untaxed(*money))
    }
}

impl PriceModifier for FlatTax {
    fn apply(&self, base: &Priced) -> PriceResult<Priced> {
        tracing::debug!(modifier = %self, target = base.kind(), "applying flat tax");

        match base {
            Priced::Money(money) => self.tax_money(money).map(Priced::from),
            Priced::TaxedMoney(price) => self.tax_price(price).map(Priced::from),
            Priced::MoneyRange(range) => TaxedMoneyRange::new(
                self.tax_money(&range.start())?,
                self.tax_money(&range.stop())?,
            )
            .map(Priced::from),
            Priced::TaxedMoneyRange(range) => TaxedMoneyRange::new(
                self.tax_price(&range.start())?,
                self.tax_price(&range.stop())?,
            )
            .map(Priced::from),
        }
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for FlatTax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FlatTax('{}', keep_gross={}, name=",
            self.rate,
            if self.keep_gross { "True" } else { "False" }
        )?;
        write_name(f, self.name.as_deref())?;
        write!(f, ")")
    }
}

pub(super) fn write_name(f: &mut fmt::Formatter<'_>, name: Option<&str>) -> fmt::Result {
    match name {
        Some(name) => write!(f, "'{}'", name),
        None => write!(f, "None"),
    }
}
