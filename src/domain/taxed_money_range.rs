// ============================================================================
// Taxed Money Range Domain Model
// An ordered pair of TaxedMoney bounds (ordered by gross)
// ============================================================================

use super::{Money, MoneyRange, TaxedMoney};
use crate::currency::Currency;
use crate::numeric::{ensure_same_currency, PriceError, PriceResult, Quantization};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed range of prices in a single currency.
///
/// Bounds are ordered by gross amount. Combining with a bare [`Money`] or
/// [`MoneyRange`] applies the amount to both net and gross of each bound.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxedMoneyRange {
    start: TaxedMoney,
    stop: TaxedMoney,
}

impl TaxedMoneyRange {
    /// Create a range from two price bounds.
    ///
    /// # Errors
    /// Returns `Construction` if the bounds use different currencies or if
    /// `start` has a strictly greater gross than `stop`.
    pub fn new(start: TaxedMoney, stop: TaxedMoney) -> PriceResult<Self> {
        if start.currency() != stop.currency() {
            return Err(PriceError::construction(format!(
                "cannot create a range as {} and {} use different currencies",
                start, stop
            )));
        }
        if start.try_gt(&stop)? {
            return Err(PriceError::construction(format!(
                "cannot create a range from {} to {}",
                start, stop
            )));
        }
        Ok(Self { start, stop })
    }

    /// Degenerate range holding a single price.
    pub fn single(value: TaxedMoney) -> Self {
        Self {
            start: value,
            stop: value,
        }
    }

    /// Lower bound.
    #[inline]
    pub const fn start(&self) -> TaxedMoney {
        self.start
    }

    /// Upper bound.
    #[inline]
    pub const fn stop(&self) -> TaxedMoney {
        self.stop
    }

    /// Currency shared by both bounds.
    #[inline]
    pub const fn currency(&self) -> Currency {
        self.start.currency()
    }

    // ========================================================================
    // Combination with bare amounts (applied to net and gross)
    // ========================================================================

    pub fn checked_add_money(&self, money: &Money) -> PriceResult<Self> {
        ensure_same_currency("add", self.currency(), money.currency())?;
        Self::new(
            self.start.checked_add_money(money)?,
            self.stop.checked_add_money(money)?,
        )
    }

    pub fn checked_sub_money(&self, money: &Money) -> PriceResult<Self> {
        ensure_same_currency("subtract", self.currency(), money.currency())?;
        Self::new(
            self.start.checked_sub_money(money)?,
            self.stop.checked_sub_money(money)?,
        )
    }

    pub fn checked_add_money_range(&self, range: &MoneyRange) -> PriceResult<Self> {
        ensure_same_currency("add", self.currency(), range.currency())?;
        Self::new(
            self.start.checked_add_money(&range.start())?,
            self.stop.checked_add_money(&range.stop())?,
        )
    }

    pub fn checked_sub_money_range(&self, range: &MoneyRange) -> PriceResult<Self> {
        ensure_same_currency("subtract", self.currency(), range.currency())?;
        Self::new(
            self.start.checked_sub_money(&range.start())?,
            self.stop.checked_sub_money(&range.stop())?,
        )
    }

    // ========================================================================
    // Combination with prices (component-wise)
    // ========================================================================

    pub fn checked_add_taxed(&self, price: &TaxedMoney) -> PriceResult<Self> {
        ensure_same_currency("add", self.currency(), price.currency())?;
        Self::new(self.start.checked_add(price)?, self.stop.checked_add(price)?)
    }

    pub fn checked_sub_taxed(&self, price: &TaxedMoney) -> PriceResult<Self> {
        ensure_same_currency("subtract", self.currency(), price.currency())?;
        Self::new(self.start.checked_sub(price)?, self.stop.checked_sub(price)?)
    }

    /// Bound-wise sum of two price ranges.
    pub fn checked_add(&self, other: &TaxedMoneyRange) -> PriceResult<Self> {
        ensure_same_currency("add", self.currency(), other.currency())?;
        Self::new(
            self.start.checked_add(&other.start)?,
            self.stop.checked_add(&other.stop)?,
        )
    }

    /// Bound-wise difference of two price ranges.
    pub fn checked_sub(&self, other: &TaxedMoneyRange) -> PriceResult<Self> {
        ensure_same_currency("subtract", self.currency(), other.currency())?;
        Self::new(
            self.start.checked_sub(&other.start)?,
            self.stop.checked_sub(&other.stop)?,
        )
    }

    /// Membership test: `start <= price <= stop` with price ordering, so a
    /// price matching a bound's gross but not its net is outside.
    pub fn contains(&self, price: &TaxedMoney) -> PriceResult<bool> {
        Ok(self.start.try_le(price)? && price.try_le(&self.stop)?)
    }

    /// Quantize both bounds to the currency's digits (round-half-up).
    pub fn quantize(&self) -> Self {
        self.quantize_with(Quantization::default())
    }

    /// Quantize every component of both bounds with the same rule.
    pub fn quantize_with(&self, quantization: Quantization) -> Self {
        Self {
            start: self.start.quantize_with(quantization),
            stop: self.stop.quantize_with(quantization),
        }
    }

    /// Copy with one or both bounds replaced; the result is re-validated.
    pub fn replace(
        &self,
        start: Option<TaxedMoney>,
        stop: Option<TaxedMoney>,
    ) -> PriceResult<Self> {
        Self::new(start.unwrap_or(self.start), stop.unwrap_or(self.stop))
    }
}

impl fmt::Display for TaxedMoneyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaxedMoneyRange({}, {})", self.start, self.stop)
    }
}

impl fmt::Debug for TaxedMoneyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;

    fn eur(amount: i64) -> Money {
        Money::from_integer(amount, "EUR")
    }

    fn taxed(net: i64, gross: i64, currency: &str) -> TaxedMoney {
        TaxedMoney::new(
            Money::from_integer(net, currency),
            Money::from_integer(gross, currency),
        )
        .unwrap()
    }

    fn low_range() -> TaxedMoneyRange {
        TaxedMoneyRange::new(taxed(10, 15, "EUR"), taxed(30, 45, "EUR")).unwrap()
    }

    fn high_range() -> TaxedMoneyRange {
        TaxedMoneyRange::new(taxed(40, 60, "EUR"), taxed(80, 120, "EUR")).unwrap()
    }

    fn btc_range() -> TaxedMoneyRange {
        TaxedMoneyRange::new(taxed(1, 1, "BTC"), taxed(2, 2, "BTC")).unwrap()
    }

    #[test]
    fn test_construction() {
        let range = low_range();
        assert_eq!(range.start(), taxed(10, 15, "EUR"));
        assert_eq!(range.stop(), taxed(30, 45, "EUR"));

        let err = TaxedMoneyRange::new(taxed(10, 15, "EUR"), taxed(20, 20, "PLN")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);
        let err = TaxedMoneyRange::new(taxed(30, 45, "EUR"), taxed(10, 15, "EUR")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);
    }

    #[test]
    fn test_construction_with_equal_gross() {
        // Equal gross is not "greater", whatever the nets are
        assert!(TaxedMoneyRange::new(taxed(12, 15, "EUR"), taxed(10, 15, "EUR")).is_ok());
    }

    #[test]
    fn test_addition_with_money() {
        let range = low_range();
        let result = range.checked_add_money(&eur(40)).unwrap();
        assert_eq!(result.start(), taxed(50, 55, "EUR"));
        assert_eq!(result.stop(), taxed(70, 85, "EUR"));
        assert_eq!(
            range
                .checked_add_money(&Money::from_integer(1, "BTC"))
                .unwrap_err()
                .kind(),
            ErrorKind::CurrencyMismatch
        );
    }

    #[test]
    fn test_addition_with_money_range() {
        let range = low_range();
        let money_range = MoneyRange::new(eur(40), eur(80)).unwrap();
        let result = range.checked_add_money_range(&money_range).unwrap();
        assert_eq!(result.start(), taxed(50, 55, "EUR"));
        assert_eq!(result.stop(), taxed(110, 125, "EUR"));
        let btc = MoneyRange::new(Money::from_integer(1, "BTC"), Money::from_integer(2, "BTC"))
            .unwrap();
        assert!(range.checked_add_money_range(&btc).is_err());
    }

    #[test]
    fn test_addition_with_taxed_money() {
        let range = low_range();
        let result = range.checked_add_taxed(&taxed(40, 60, "EUR")).unwrap();
        assert_eq!(result.start(), taxed(50, 75, "EUR"));
        assert_eq!(result.stop(), taxed(70, 105, "EUR"));
        assert!(range.checked_add_taxed(&taxed(1, 1, "BTC")).is_err());
    }

    #[test]
    fn test_addition_with_taxed_money_range() {
        let result = low_range().checked_add(&high_range()).unwrap();
        assert_eq!(result.start(), taxed(50, 75, "EUR"));
        assert_eq!(result.stop(), taxed(110, 165, "EUR"));
        assert!(low_range().checked_add(&btc_range()).is_err());
    }

    #[test]
    fn test_subtraction_with_money() {
        let range = high_range();
        let result = range.checked_sub_money(&eur(10)).unwrap();
        assert_eq!(result.start(), taxed(30, 50, "EUR"));
        assert_eq!(result.stop(), taxed(70, 110, "EUR"));
        assert!(range
            .checked_sub_money(&Money::from_integer(1, "BTC"))
            .is_err());
    }

    #[test]
    fn test_subtraction_with_money_range() {
        let money_range = MoneyRange::new(eur(10), eur(30)).unwrap();
        let result = high_range().checked_sub_money_range(&money_range).unwrap();
        assert_eq!(result.start(), taxed(30, 50, "EUR"));
        assert_eq!(result.stop(), taxed(50, 90, "EUR"));
    }

    #[test]
    fn test_subtraction_with_taxed_money() {
        let result = high_range()
            .checked_sub_taxed(&taxed(10, 15, "EUR"))
            .unwrap();
        assert_eq!(result.start(), taxed(30, 45, "EUR"));
        assert_eq!(result.stop(), taxed(70, 105, "EUR"));
    }

    #[test]
    fn test_subtraction_with_taxed_money_range() {
        let result = high_range().checked_sub(&low_range()).unwrap();
        assert_eq!(result.start(), taxed(30, 45, "EUR"));
        assert_eq!(result.stop(), taxed(50, 75, "EUR"));
        assert!(high_range().checked_sub(&btc_range()).is_err());
    }

    #[test]
    fn test_comparison() {
        assert_eq!(low_range(), low_range());
        assert_ne!(low_range(), high_range());
        assert_ne!(low_range(), TaxedMoneyRange::single(taxed(10, 15, "EUR")));
        let usd = TaxedMoneyRange::new(taxed(10, 15, "USD"), taxed(30, 45, "USD")).unwrap();
        assert_ne!(low_range(), usd);
    }

    #[test]
    fn test_membership() {
        let range = low_range();
        let start = taxed(10, 15, "EUR");
        let stop = taxed(30, 45, "EUR");
        assert!(range.contains(&start).unwrap());
        assert!(range.contains(&stop).unwrap());

        let middle = start.checked_add(&stop).unwrap().checked_div(2).unwrap();
        assert!(range.contains(&middle).unwrap());
        assert!(!range.contains(&start.checked_add(&stop).unwrap()).unwrap());

        // Same gross as the lower bound but a different net
        assert!(!range.contains(&taxed(11, 15, "EUR")).unwrap());
    }

    #[test]
    fn test_quantize() {
        let result = low_range().quantize();
        assert_eq!(result.start().net().amount().to_string(), "10.00");
        assert_eq!(result.stop().net().amount().to_string(), "30.00");
    }

    #[test]
    fn test_replace() {
        let range = low_range();
        let price = taxed(20, 30, "EUR");
        let result = range.replace(None, Some(price)).unwrap();
        assert_eq!(result.start(), taxed(10, 15, "EUR"));
        assert_eq!(result.stop(), price);
        let result = range.replace(Some(price), None).unwrap();
        assert_eq!(result.start(), price);
        assert_eq!(result.stop(), taxed(30, 45, "EUR"));
        assert!(range.replace(Some(taxed(90, 90, "EUR")), None).is_err());
    }

    #[test]
    fn test_currency() {
        assert_eq!(low_range().currency(), "EUR");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            low_range().to_string(),
            "TaxedMoneyRange(TaxedMoney(net=Money('10', 'EUR'), gross=Money('15', 'EUR')), \
             TaxedMoney(net=Money('30', 'EUR'), gross=Money('45', 'EUR')))"
        );
    }
}
