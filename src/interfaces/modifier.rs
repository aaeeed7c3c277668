// ============================================================================
// Price Modifier Interface
// Defines the contract for taxes, discounts and other value transforms
// ============================================================================

use super::priced::{Operand, Priced};
use crate::domain::{Money, MoneyRange, TaxedMoney, TaxedMoneyRange};
use crate::numeric::{PriceError, PriceResult};
use std::fmt;

/// Strategy pattern interface for price modifiers
/// Implementations: LinearTax, FlatTax, FixedDiscount, FractionalDiscount
pub trait PriceModifier: fmt::Debug + Send + Sync {
    /// Apply the modifier to a priced value
    ///
    /// # Returns
    /// The transformed value; its kind may differ from the input's
    /// (taxing a `Money` yields a `TaxedMoney`).
    fn apply(&self, base: &Priced) -> PriceResult<Priced>;

    /// Optional human-readable label (e.g. "VAT")
    fn name(&self) -> Option<&str>;

    /// Apply to a dynamically typed operand; bare scalars carry no price.
    fn apply_operand(&self, operand: &Operand) -> PriceResult<Priced> {
        match operand {
            Operand::Priced(priced) => self.apply(priced),
            Operand::Scalar(_) => Err(PriceError::unsupported(
                "apply modifier to",
                "PriceModifier",
                operand.kind(),
            )),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Money {}
    impl Sealed for super::MoneyRange {}
    impl Sealed for super::TaxedMoney {}
    impl Sealed for super::TaxedMoneyRange {}
}

/// Values a modifier can be applied to.
///
/// Implemented for exactly the four value kinds.
pub trait Modifiable: sealed::Sealed + Copy + Into<Priced> {
    /// Apply `modifier` to this value.
    fn modify(&self, modifier: &dyn PriceModifier) -> PriceResult<Priced> {
        modifier.apply(&(*self).into())
    }

    /// Apply `modifier` and narrow the result to a concrete kind.
    ///
    /// # Errors
    /// `TypeMismatch` if the modifier produced a different kind than `T`.
    fn modify_as<T>(&self, modifier: &dyn PriceModifier) -> PriceResult<T>
    where
        T: TryFrom<Priced, Error = PriceError>,
    {
        T::try_from(self.modify(modifier)?)
    }
}

impl Modifiable for Money {}
impl Modifiable for MoneyRange {}
impl Modifiable for TaxedMoney {}
impl Modifiable for TaxedMoneyRange {}
