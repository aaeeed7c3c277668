// ============================================================================
// Discount Modifiers
// Fixed and fractional discounts, floored at zero
// ============================================================================

use super::tax::write_name;
use crate::domain::{Money, MoneyRange, TaxedMoney, TaxedMoneyRange};
use crate::interfaces::{PriceModifier, Priced};
use crate::numeric::{
    Decimal, PriceError, PriceResult, Quantization, RoundingStrategy, ROUND_DOWN,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Subtracts a fixed amount from every component, never going below zero.
///
/// Net and gross are clipped independently, so a discount larger than the
/// net but smaller than the gross leaves `net == 0` and a positive gross.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedDiscount {
    amount: Money,
    name: Option<String>,
}

impl FixedDiscount {
    pub fn new(amount: Money) -> Self {
        Self { amount, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    fn discount_money(&self, money: &Money) -> PriceResult<Money> {
        money
            .checked_sub(&self.amount)?
            .checked_max(Money::zero(money.currency()))
    }

    fn discount_price(&self, price: &TaxedMoney) -> PriceResult<TaxedMoney> {
        TaxedMoney::new(
            self.discount_money(&price.net())?,
            self.discount_money(&price.gross())?,
        )
    }

    fn discount(&self, base: &Priced) -> PriceResult<Priced> {
        match base {
            Priced::Money(money) => self.discount_money(money).map(Priced::from),
            Priced::TaxedMoney(price) => self.discount_price(price).map(Priced::from),
            Priced::MoneyRange(range) => MoneyRange::new(
                self.discount_money(&range.start())?,
                self.discount_money(&range.stop())?,
            )
            .map(Priced::from),
            Priced::TaxedMoneyRange(range) => TaxedMoneyRange::new(
                self.discount_price(&range.start())?,
                self.discount_price(&range.stop())?,
            )
            .map(Priced::from),
        }
    }
}

impl PriceModifier for FixedDiscount {
    fn apply(&self, base: &Priced) -> PriceResult<Priced> {
        tracing::debug!(modifier = %self, target = base.kind(), "applying fixed discount");
        self.discount(base)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for FixedDiscount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDiscount({}, name=", self.amount)?;
        write_name(f, self.name.as_deref())?;
        write!(f, ")")
    }
}

/// Subtracts a fraction of the price from every component.
///
/// The discount is `base * factor`, where `base` is gross (default) or net,
/// quantized to the currency's digits with the configured rounding (round
/// down by default) and then applied like a [`FixedDiscount`]. Ranges are
/// discounted bound by bound. A negative factor is rejected on apply.
///
/// # Example
/// ```
/// use prices::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let price = TaxedMoney::new(Money::new(dec!(1.01), "BTC"), Money::new(dec!(1.01), "BTC"))?;
/// let half_off = FractionalDiscount::new(dec!(0.5));
/// let result: TaxedMoney = price.modify_as(&half_off)?;
/// assert_eq!(result.net(), Money::new(dec!(0.51), "BTC"));
///
/// let half_off = half_off.with_rounding(ROUND_HALF_UP);
/// let result: TaxedMoney = price.modify_as(&half_off)?;
/// assert_eq!(result.net(), Money::new(dec!(0.50), "BTC"));
/// # Ok::<(), PriceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionalDiscount {
    factor: Decimal,
    from_gross: bool,
    rounding: RoundingStrategy,
    name: Option<String>,
}

impl FractionalDiscount {
    pub fn new(factor: impl Into<Decimal>) -> Self {
        Self {
            factor: factor.into(),
            from_gross: true,
            rounding: ROUND_DOWN,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Compute the discount from net instead of gross.
    pub fn from_net(mut self) -> Self {
        self.from_gross = false;
        self
    }

    /// Rounding used when quantizing the discount amount.
    pub fn with_rounding(mut self, rounding: RoundingStrategy) -> Self {
        self.rounding = rounding;
        self
    }

    #[inline]
    pub const fn factor(&self) -> Decimal {
        self.factor
    }

    #[inline]
    pub const fn is_from_gross(&self) -> bool {
        self.from_gross
    }

    #[inline]
    pub const fn rounding(&self) -> RoundingStrategy {
        self.rounding
    }

    /// Validate discount parameters
    pub fn validate(&self) -> PriceResult<()> {
        if self.factor.is_sign_negative() && !self.factor.is_zero() {
            return Err(PriceError::construction(format!(
                "discount factor must not be negative, got {}",
                self.factor
            )));
        }
        Ok(())
    }

    fn fixed_for(&self, base: &Money) -> PriceResult<FixedDiscount> {
        let quantization = Quantization::currency_default().with_rounding(self.rounding);
        let amount = base.checked_mul(self.factor)?.quantize_with(quantization);
        Ok(FixedDiscount::new(amount))
    }

    fn discount_money(&self, money: &Money) -> PriceResult<Money> {
        self.fixed_for(money)?.discount_money(money)
    }

    fn discount_price(&self, price: &TaxedMoney) -> PriceResult<TaxedMoney> {
        let base = if self.from_gross {
            price.gross()
        } else {
            price.net()
        };
        self.fixed_for(&base)?.discount_price(price)
    }
}

impl PriceModifier for FractionalDiscount {
    fn apply(&self, base: &Priced) -> PriceResult<Priced> {
        tracing::debug!(modifier = %self, target = base.kind(), "applying fractional discount");
        self.validate()?;

        match base {
            Priced::Money(money) => self.discount_money(money).map(Priced::from),
            Priced::TaxedMoney(price) => self.discount_price(price).map(Priced::from),
            Priced::MoneyRange(range) => MoneyRange::new(
                self.discount_money(&range.start())?,
                self.discount_money(&range.stop())?,
            )
            .map(Priced::from),
            Priced::TaxedMoneyRange(range) => TaxedMoneyRange::new(
                self.discount_price(&range.start())?,
                self.discount_price(&range.stop())?,
            )
            .map(Priced::from),
        }
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for FractionalDiscount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FractionalDiscount('{}', from_gross={}, name=",
            self.factor,
            if self.from_gross { "True" } else { "False" }
        )?;
        write_name(f, self.name.as_deref())?;
        write!(f, ")")
    }
}

/// Fractional discount expressed in percent: `percentage_discount(10)` takes
/// 10% off.
pub fn percentage_discount(percentage: impl Into<Decimal>) -> FractionalDiscount {
    FractionalDiscount::new(percentage.into() / Decimal::ONE_HUNDRED)
}
