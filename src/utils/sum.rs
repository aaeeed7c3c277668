// ============================================================================
// Summation
// Left fold over priced values using each kind's own checked addition
// ============================================================================

use crate::domain::{Money, MoneyRange, TaxedMoney, TaxedMoneyRange};
use crate::interfaces::{Operand, Priced};
use crate::numeric::{PriceError, PriceResult};

/// Values that can be added to another value of the same kind.
pub trait Summable: Sized {
    fn checked_sum(&self, rhs: &Self) -> PriceResult<Self>;
}

impl Summable for Money {
    fn checked_sum(&self, rhs: &Self) -> PriceResult<Self> {
        self.checked_add(rhs)
    }
}

impl Summable for MoneyRange {
    fn checked_sum(&self, rhs: &Self) -> PriceResult<Self> {
        self.checked_add(rhs)
    }
}

impl Summable for TaxedMoney {
    fn checked_sum(&self, rhs: &Self) -> PriceResult<Self> {
        self.checked_add(rhs)
    }
}

impl Summable for TaxedMoneyRange {
    fn checked_sum(&self, rhs: &Self) -> PriceResult<Self> {
        self.checked_add(rhs)
    }
}

impl Summable for Priced {
    fn checked_sum(&self, rhs: &Self) -> PriceResult<Self> {
        self.add(&Operand::Priced(*rhs))
    }
}

/// Sum of the given values, folding left to right.
///
/// There is no currency-free zero, so an empty input is an error rather
/// than a default value.
///
/// # Errors
/// `EmptySum` on empty input, otherwise whatever the first failing
/// addition returns.
///
/// # Example
/// ```
/// use prices::prelude::*;
///
/// let total = sum([
///     Money::from_integer(5, "USD"),
///     Money::from_integer(7, "USD"),
/// ])?;
/// assert_eq!(total, Money::from_integer(12, "USD"));
/// # Ok::<(), PriceError>(())
/// ```
pub fn sum<T, I>(values: I) -> PriceResult<T>
where
    T: Summable,
    I: IntoIterator<Item = T>,
{
    let mut values = values.into_iter();
    let first = values.next().ok_or(PriceError::EmptySum)?;
    values.try_fold(first, |total, value| total.checked_sum(&value))
}
