// ============================================================================
// Money Range Domain Model
// An ordered pair of same-currency Money bounds
// ============================================================================

use super::Money;
use crate::currency::Currency;
use crate::numeric::{ensure_same_currency, PriceError, PriceResult, Quantization};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed range of money, `start <= stop`, in a single currency.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyRange {
    start: Money,
    stop: Money,
}

impl MoneyRange {
    /// Create a range from two bounds.
    ///
    /// # Errors
    /// Returns `Construction` if the bounds use different currencies or if
    /// `start > stop`.
    pub fn new(start: Money, stop: Money) -> PriceResult<Self> {
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

    /// Degenerate range holding a single value.
    pub fn single(value: Money) -> Self {
        Self {
            start: value,
            stop: value,
        }
    }

    /// Lower bound.
    #[inline]
    pub const fn start(&self) -> Money {
        self.start
    }

    /// Upper bound.
    #[inline]
    pub const fn stop(&self) -> Money {
        self.stop
    }

    /// Currency shared by both bounds.
    #[inline]
    pub const fn currency(&self) -> Currency {
        self.start.currency()
    }

    /// Shift both bounds up by `money`.
    pub fn checked_add_money(&self, money: &Money) -> PriceResult<Self> {
        ensure_same_currency("add", self.currency(), money.currency())?;
        Self::new(self.start.checked_add(money)?, self.stop.checked_add(money)?)
    }

    /// Shift both bounds down by `money`.
    pub fn checked_sub_money(&self, money: &Money) -> PriceResult<Self> {
        ensure_same_currency("subtract", self.currency(), money.currency())?;
        Self::new(self.start.checked_sub(money)?, self.stop.checked_sub(money)?)
    }

    /// Bound-wise sum: `start + start`, `stop + stop`.
    pub fn checked_add(&self, other: &MoneyRange) -> PriceResult<Self> {
        ensure_same_currency("add", self.currency(), other.currency())?;
        Self::new(
            self.start.checked_add(&other.start)?,
            self.stop.checked_add(&other.stop)?,
        )
    }

    /// Bound-wise difference: `start - start`, `stop - stop`.
    ///
    /// # Errors
    /// `Construction` if the resulting bounds would be inverted.
    pub fn checked_sub(&self, other: &MoneyRange) -> PriceResult<Self> {
        ensure_same_currency("subtract", self.currency(), other.currency())?;
        Self::new(
            self.start.checked_sub(&other.start)?,
            self.stop.checked_sub(&other.stop)?,
        )
    }

    /// Membership test: `start <= money <= stop`.
    ///
    /// # Errors
    /// `CurrencyMismatch` if `money` uses another currency.
    pub fn contains(&self, money: &Money) -> PriceResult<bool> {
        Ok(self.start.try_le(money)? && money.try_le(&self.stop)?)
    }

    /// Quantize both bounds to the currency's digits (round-half-up).
    pub fn quantize(&self) -> Self {
        self.quantize_with(Quantization::default())
    }

    /// Quantize both bounds with the same rule.
    ///
    /// Every rounding mode is monotonic, so the bounds stay ordered.
    pub fn quantize_with(&self, quantization: Quantization) -> Self {
        Self {
            start: self.start.quantize_with(quantization),
            stop: self.stop.quantize_with(quantization),
        }
    }

    /// Copy with one or both bounds replaced; the result is re-validated.
    pub fn replace(&self, start: Option<Money>, stop: Option<Money>) -> PriceResult<Self> {
        Self::new(start.unwrap_or(self.start), stop.unwrap_or(self.stop))
    }
}

impl fmt::Display for MoneyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoneyRange({}, {})", self.start, self.stop)
    }
}

impl fmt::Debug for MoneyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{ErrorKind, ROUND_DOWN};
    use rust_decimal_macros::dec;

    fn eur(amount: i64) -> Money {
        Money::from_integer(amount, "EUR")
    }

    fn btc(amount: i64) -> Money {
        Money::from_integer(amount, "BTC")
    }

    #[test]
    fn test_construction() {
        let range = MoneyRange::new(eur(10), eur(30)).unwrap();
        assert_eq!(range.start(), eur(10));
        assert_eq!(range.stop(), eur(30));

        let err = MoneyRange::new(eur(10), Money::from_integer(20, "PLN")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);
        let err = MoneyRange::new(eur(30), eur(10)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);

        let degenerate = MoneyRange::single(eur(5));
        assert_eq!(degenerate, MoneyRange::new(eur(5), eur(5)).unwrap());
    }

    #[test]
    fn test_addition_with_money() {
        let range = MoneyRange::new(eur(10), eur(30)).unwrap();
        let result = range.checked_add_money(&eur(40)).unwrap();
        assert_eq!(result.start(), eur(50));
        assert_eq!(result.stop(), eur(70));
        assert_eq!(
            range.checked_add_money(&btc(1)).unwrap_err().kind(),
            ErrorKind::CurrencyMismatch
        );
    }

    #[test]
    fn test_addition_with_money_range() {
        let range1 = MoneyRange::new(eur(10), eur(30)).unwrap();
        let range2 = MoneyRange::new(eur(40), eur(80)).unwrap();
        let result = range1.checked_add(&range2).unwrap();
        assert_eq!(result.start(), eur(50));
        assert_eq!(result.stop(), eur(110));
        let other = MoneyRange::new(btc(1), btc(2)).unwrap();
        assert_eq!(
            range1.checked_add(&other).unwrap_err().kind(),
            ErrorKind::CurrencyMismatch
        );
    }

    #[test]
    fn test_subtraction_with_money() {
        let range = MoneyRange::new(eur(40), eur(80)).unwrap();
        let result = range.checked_sub_money(&eur(10)).unwrap();
        assert_eq!(result.start(), eur(30));
        assert_eq!(result.stop(), eur(70));
        assert!(range.checked_sub_money(&btc(1)).is_err());
    }

    #[test]
    fn test_subtraction_with_money_range() {
        let range1 = MoneyRange::new(eur(10), eur(30)).unwrap();
        let range2 = MoneyRange::new(eur(40), eur(80)).unwrap();
        let result = range2.checked_sub(&range1).unwrap();
        assert_eq!(result.start(), eur(30));
        assert_eq!(result.stop(), eur(50));

        // 10-40 > 30-80 would invert the bounds
        assert_eq!(
            range1.checked_sub(&range2).unwrap_err().kind(),
            ErrorKind::Construction
        );
    }

    #[test]
    fn test_comparison() {
        let range1 = MoneyRange::new(eur(10), eur(30)).unwrap();
        let range2 = MoneyRange::new(eur(40), eur(80)).unwrap();
        assert_eq!(range1, MoneyRange::new(eur(10), eur(30)).unwrap());
        assert_ne!(range1, range2);
        assert_ne!(range1, MoneyRange::single(eur(10)));
        assert_ne!(
            range1,
            MoneyRange::new(Money::from_integer(10, "USD"), Money::from_integer(30, "USD"))
                .unwrap()
        );
    }

    #[test]
    fn test_membership() {
        let range = MoneyRange::new(eur(10), eur(30)).unwrap();
        assert!(range.contains(&eur(10)).unwrap());
        assert!(range.contains(&eur(30)).unwrap());
        assert!(range.contains(&eur(20)).unwrap());
        assert!(!range.contains(&eur(40)).unwrap());
        assert!(!range.contains(&eur(9)).unwrap());
        assert_eq!(
            range.contains(&btc(20)).unwrap_err().kind(),
            ErrorKind::CurrencyMismatch
        );
    }

    #[test]
    fn test_quantize() {
        let range = MoneyRange::new(eur(10), eur(30)).unwrap();
        let result = range.quantize();
        assert_eq!(result.start().amount().to_string(), "10.00");
        assert_eq!(result.stop().amount().to_string(), "30.00");

        let fractional =
            MoneyRange::new(Money::new(dec!(1.999), "EUR"), Money::new(dec!(2.999), "EUR"))
                .unwrap();
        let result = fractional
            .quantize_with(Quantization::default().with_rounding(ROUND_DOWN));
        assert_eq!(result.start().amount(), dec!(1.99));
        assert_eq!(result.stop().amount(), dec!(2.99));
    }

    #[test]
    fn test_replace() {
        let range = MoneyRange::new(eur(10), eur(30)).unwrap();
        let result = range.replace(None, Some(eur(20))).unwrap();
        assert_eq!(result.start(), eur(10));
        assert_eq!(result.stop(), eur(20));
        let result = range.replace(Some(eur(20)), None).unwrap();
        assert_eq!(result.start(), eur(20));
        assert_eq!(result.stop(), eur(30));

        // Replacement is validated like construction
        assert!(range.replace(Some(eur(50)), None).is_err());
        assert!(range.replace(None, Some(btc(50))).is_err());
    }

    #[test]
    fn test_currency() {
        let range = MoneyRange::new(eur(10), eur(30)).unwrap();
        assert_eq!(range.currency(), "EUR");
    }

    #[test]
    fn test_display() {
        let range = MoneyRange::new(eur(10), eur(30)).unwrap();
        assert_eq!(
            range.to_string(),
            "MoneyRange(Money('10', 'EUR'), Money('30', 'EUR'))"
        );
    }
}
