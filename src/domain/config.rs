// ============================================================================
// Pricing Configuration
// Declarative description of tax and discount pipelines
// ============================================================================

use super::Money;
use crate::numeric::{Decimal, PriceError, PriceResult, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rounding Mode
// ============================================================================

/// Rounding rules selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Toward zero (truncate)
    #[default]
    Down,
    /// Nearest, ties away from zero
    HalfUp,
    /// Nearest, ties to even (banker's rounding)
    HalfEven,
    /// Away from zero
    Up,
}

impl From<RoundingMode> for RoundingStrategy {
    fn from(mode: RoundingMode) -> Self {
        match mode {
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
        }
    }
}

// ============================================================================
// Modifier Type
// ============================================================================

/// Defines a single price modifier and its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ModifierType {
    /// Net-based tax: gross += net * multiplier
    LinearTax {
        multiplier: Decimal,
        #[cfg_attr(feature = "serde", serde(default))]
        name: Option<String>,
    },

    /// Gross-based tax at a flat rate
    FlatTax {
        rate: Decimal,
        /// Treat gross as tax-inclusive and derive net from it
        #[cfg_attr(feature = "serde", serde(default))]
        keep_gross: bool,
        #[cfg_attr(feature = "serde", serde(default))]
        name: Option<String>,
    },

    /// Fixed amount off, floored at zero
    FixedDiscount {
        amount: Money,
        #[cfg_attr(feature = "serde", serde(default))]
        name: Option<String>,
    },

    /// Fraction of the price off (0.25 = 25%)
    FractionalDiscount {
        factor: Decimal,
        #[cfg_attr(feature = "serde", serde(default = "default_from_gross"))]
        from_gross: bool,
        #[cfg_attr(feature = "serde", serde(default))]
        rounding: RoundingMode,
        #[cfg_attr(feature = "serde", serde(default))]
        name: Option<String>,
    },

    /// Percentage of the price off (25 = 25%)
    PercentageDiscount {
        percentage: Decimal,
        #[cfg_attr(feature = "serde", serde(default = "default_from_gross"))]
        from_gross: bool,
        #[cfg_attr(feature = "serde", serde(default))]
        rounding: RoundingMode,
        #[cfg_attr(feature = "serde", serde(default))]
        name: Option<String>,
    },
}

#[cfg(feature = "serde")]
fn default_from_gross() -> bool {
    true
}

impl ModifierType {
    /// Validate modifier parameters
    pub fn validate(&self) -> PriceResult<()> {
        match self {
            ModifierType::FlatTax { rate, .. } => {
                if *rate <= -Decimal::ONE {
                    return Err(PriceError::construction(format!(
                        "flat tax rate must be greater than -1, got {}",
                        rate
                    )));
                }
            },
            ModifierType::FractionalDiscount { factor, .. } => {
                if *factor < Decimal::ZERO {
                    return Err(PriceError::construction(
                        "discount factor cannot be negative",
                    ));
                }
            },
            ModifierType::PercentageDiscount { percentage, .. } => {
                if *percentage < Decimal::ZERO {
                    return Err(PriceError::construction(
                        "discount percentage cannot be negative",
                    ));
                }
            },
            ModifierType::LinearTax { .. } | ModifierType::FixedDiscount { .. } => {},
        }
        Ok(())
    }
}

// ============================================================================
// Complete Pricing Configuration
// ============================================================================

/// Ordered list of modifiers applied one after another
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingConfig {
    /// Optional label for the pipeline (e.g. "EU retail")
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,

    /// Modifiers in application order
    pub modifiers: Vec<ModifierType>,
}

impl PricingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set pipeline label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method: Append a modifier
    pub fn with_modifier(mut self, modifier: ModifierType) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> PriceResult<()> {
        self.modifiers.iter().try_for_each(ModifierType::validate)
    }

    /// Parse a configuration from JSON and validate it
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> PriceResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| PriceError::construction(format!("invalid pricing config: {}", err)))?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl PricingConfig {
    /// Net-based VAT added on top of net prices
    pub fn vat(rate: Decimal) -> Self {
        Self::new().with_name("VAT").with_modifier(ModifierType::LinearTax {
            multiplier: rate,
            name: Some("VAT".to_string()),
        })
    }

    /// VAT already included in the listed (gross) prices
    pub fn vat_inclusive(rate: Decimal) -> Self {
        Self::new()
            .with_name("VAT inclusive")
            .with_modifier(ModifierType::FlatTax {
                rate,
                keep_gross: true,
                name: Some("VAT".to_string()),
            })
    }
}
