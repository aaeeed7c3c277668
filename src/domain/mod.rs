// ============================================================================
// Domain Models Module
// Contains the four immutable price value objects and pricing configuration
// ============================================================================

pub mod config;
pub mod money;
pub mod money_range;
pub mod taxed_money;
pub mod taxed_money_range;

pub use config::{ModifierType, PricingConfig, RoundingMode};
pub use money::Money;
pub use money_range::MoneyRange;
pub use taxed_money::TaxedMoney;
pub use taxed_money_range::TaxedMoneyRange;
