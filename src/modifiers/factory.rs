// ============================================================================
// Modifier Factory
// Builds modifiers and modifier chains from configuration
// ============================================================================

use super::{percentage_discount, FixedDiscount, FlatTax, FractionalDiscount, LinearTax};
use crate::domain::config::{ModifierType, PricingConfig};
use crate::interfaces::{PriceModifier, Priced};
use crate::numeric::PriceResult;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a modifier chain from configuration
///
/// # Example
/// ```
/// use prices::prelude::*;
/// use prices::modifiers::create_from_config;
/// use rust_decimal_macros::dec;
///
/// let chain = create_from_config(&PricingConfig::vat(dec!(0.23)))?;
/// let price: TaxedMoney = Money::from_integer(100, "EUR").modify_as(&chain)?;
/// assert_eq!(price.gross(), Money::from_integer(123, "EUR"));
/// # Ok::<(), PriceError>(())
/// ```
pub fn create_from_config(config: &PricingConfig) -> PriceResult<ModifierChain> {
    config.validate()?;

    let mut chain = ModifierChain::new();
    if let Some(name) = &config.name {
        chain = chain.with_name(name.clone());
    }
    for modifier in &config.modifiers {
        chain.push(create_modifier(modifier)?);
    }

    tracing::debug!(
        name = ?config.name,
        modifiers = chain.len(),
        "created modifier chain from config"
    );
    Ok(chain)
}

/// Creates a single modifier from its configuration
pub fn create_modifier(modifier_type: &ModifierType) -> PriceResult<Box<dyn PriceModifier>> {
    modifier_type.validate()?;

    let modifier: Box<dyn PriceModifier> = match modifier_type {
        ModifierType::LinearTax { multiplier, name } => {
            Box::new(named(LinearTax::new(*multiplier), name, LinearTax::with_name))
        },

        ModifierType::FlatTax {
            rate,
            keep_gross,
            name,
        } => {
            let tax = FlatTax::new(*rate);
            let tax = if *keep_gross { tax.keep_gross() } else { tax };
            Box::new(named(tax, name, FlatTax::with_name))
        },

        ModifierType::FixedDiscount { amount, name } => {
            Box::new(named(FixedDiscount::new(*amount), name, FixedDiscount::with_name))
        },

        ModifierType::FractionalDiscount {
            factor,
            from_gross,
            rounding,
            name,
        } => {
            let discount = FractionalDiscount::new(*factor).with_rounding((*rounding).into());
            let discount = if *from_gross { discount } else { discount.from_net() };
            Box::new(named(discount, name, FractionalDiscount::with_name))
        },

        ModifierType::PercentageDiscount {
            percentage,
            from_gross,
            rounding,
            name,
        } => {
            let discount = percentage_discount(*percentage).with_rounding((*rounding).into());
            let discount = if *from_gross { discount } else { discount.from_net() };
            Box::new(named(discount, name, FractionalDiscount::with_name))
        },
    };
    Ok(modifier)
}

fn named<M>(modifier: M, name: &Option<String>, with_name: fn(M, String) -> M) -> M {
    match name {
        Some(name) => with_name(modifier, name.clone()),
        None => modifier,
    }
}

// ============================================================================
// Modifier Chain
// ============================================================================

/// Applies modifiers in order, feeding each result into the next
///
/// # Example
/// ```
/// use prices::prelude::*;
/// use prices::modifiers::ModifierChain;
/// use rust_decimal_macros::dec;
///
/// let chain = ModifierChain::new()
///     .then(LinearTax::new(dec!(0.23)).with_name("VAT"))
///     .then(FixedDiscount::new(Money::from_integer(10, "PLN")));
///
/// let price: TaxedMoney = Money::from_integer(100, "PLN").modify_as(&chain)?;
/// assert_eq!(price.net(), Money::from_integer(90, "PLN"));
/// assert_eq!(price.gross(), Money::from_integer(113, "PLN"));
/// # Ok::<(), PriceError>(())
/// ```
#[derive(Debug, Default)]
pub struct ModifierChain {
    modifiers: Vec<Box<dyn PriceModifier>>,
    name: Option<String>,
}

impl ModifierChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a modifier to the end of the chain
    pub fn then(mut self, modifier: impl PriceModifier + 'static) -> Self {
        self.modifiers.push(Box::new(modifier));
        self
    }

    pub fn push(&mut self, modifier: Box<dyn PriceModifier>) {
        self.modifiers.push(modifier);
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PriceModifier> {
        self.modifiers.iter().map(|modifier| modifier.as_ref())
    }
}

impl PriceModifier for ModifierChain {
    fn apply(&self, base: &Priced) -> PriceResult<Priced> {
        self.modifiers
            .iter()
            .try_fold(*base, |value, modifier| modifier.apply(&value))
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
