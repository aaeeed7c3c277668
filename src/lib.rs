// ============================================================================
// Prices Library
// Exact money, price and price-range arithmetic with taxes and discounts
// ============================================================================

//! # Prices
//!
//! Immutable money and price value objects backed by exact decimals.
//!
//! ## Features
//!
//! - **Exact arithmetic** on `rust_decimal::Decimal`, never binary floats
//! - **Currency safety**: combining different currencies is an error, not a conversion
//! - **Net/gross prices** (`TaxedMoney`) and closed ranges of both kinds
//! - **Pluggable modifiers** (linear and flat taxes, fixed and fractional discounts)
//! - **Currency-aware quantization** using ISO 4217 minor units
//!
//! Values carry no history: the crate does not record which modifiers
//! produced a price, so there is no provenance or audit trail to inspect.
//!
//! ## Example
//!
//! ```rust
//! use prices::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! // A net price, taxed at 23% and then discounted by 10%
//! let net = Money::new(dec!(19.99), "EUR");
//! let price: TaxedMoney = net.modify_as(&LinearTax::new(dec!(0.23)).with_name("VAT"))?;
//! let price: TaxedMoney = price.modify_as(&percentage_discount(10))?;
//!
//! println!("{}", price.quantize());
//! assert_eq!(price.quantize().gross().amount(), dec!(22.14));
//!
//! // Currencies never mix
//! let err = net.checked_add(&Money::from_integer(1, "USD")).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::CurrencyMismatch);
//! # Ok::<(), PriceError>(())
//! ```

pub mod currency;
pub mod domain;
pub mod interfaces;
pub mod modifiers;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::Currency;
    pub use crate::domain::{
        ModifierType, Money, MoneyRange, PricingConfig, RoundingMode, TaxedMoney,
        TaxedMoneyRange,
    };
    pub use crate::interfaces::{Modifiable, Operand, PriceModifier, Priced};
    pub use crate::modifiers::{
        percentage_discount, FixedDiscount, FlatTax, FractionalDiscount, LinearTax,
        ModifierChain,
    };
    pub use crate::numeric::{
        Decimal, ErrorKind, PriceError, PriceResult, Quantization, ROUND_DOWN, ROUND_HALF_UP,
    };
    pub use crate::utils::{sum, Summable};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal_macros::dec;

    fn money(amount: i64, currency: &str) -> Money {
        Money::from_integer(amount, currency)
    }

    #[test]
    fn test_addition_same_currency() {
        let total = money(10, "USD").checked_add(&money(20, "USD")).unwrap();
        assert_eq!(total, money(30, "USD"));
    }

    #[test]
    fn test_addition_currency_mismatch() {
        let err = money(10, "BTC").checked_add(&money(30, "USD")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CurrencyMismatch);
        assert_eq!(err.to_string(), "cannot add amounts in 'BTC' and 'USD'");
    }

    #[test]
    fn test_tax_of_price() {
        let price = TaxedMoney::new(money(20, "BTC"), money(30, "BTC")).unwrap();
        assert_eq!(price.tax().unwrap(), money(10, "BTC"));
    }

    #[test]
    fn test_linear_tax_doubles_net() {
        let price = TaxedMoney::untaxed(money(10, "BTC"));
        let result: TaxedMoney = price.modify_as(&LinearTax::new(1)).unwrap();
        assert_eq!(result.net(), money(10, "BTC"));
        assert_eq!(result.gross(), money(20, "BTC"));
    }

    #[test]
    fn test_fractional_discount_quarter_off() {
        let price = TaxedMoney::untaxed(money(100, "BTC"));
        let result: TaxedMoney = price
            .modify_as(&FractionalDiscount::new(dec!(0.25)))
            .unwrap();
        assert_eq!(result.net(), money(75, "BTC"));
        assert_eq!(result.gross(), money(75, "BTC"));
    }

    #[test]
    fn test_quantize_uses_currency_digits() {
        assert_eq!(money(1, "JPY").quantize().amount().to_string(), "1");
        assert_eq!(money(1, "USD").quantize().amount().to_string(), "1.00");
    }

    #[test]
    fn test_end_to_end_basket() {
        // Three line items, VAT on top, one fixed voucher off the total
        let items = [
            Money::new(dec!(9.99), "PLN"),
            Money::new(dec!(15.50), "PLN"),
            Money::new(dec!(4.51), "PLN"),
        ];
        let subtotal = sum(items).unwrap();
        assert_eq!(subtotal, money(30, "PLN"));

        let chain = ModifierChain::new()
            .then(LinearTax::new(dec!(0.23)).with_name("VAT"))
            .then(FixedDiscount::new(money(5, "PLN")).with_name("voucher"));
        let total: TaxedMoney = subtotal.modify_as(&chain).unwrap();
        assert_eq!(total.net(), money(25, "PLN"));
        assert_eq!(total.gross(), Money::new(dec!(31.90), "PLN"));
        assert_eq!(total.quantize().gross().amount().to_string(), "31.90");
    }

    #[test]
    fn test_price_range_pipeline() {
        let range = MoneyRange::new(money(10, "EUR"), money(30, "EUR")).unwrap();
        let taxed: TaxedMoneyRange = range.modify_as(&FlatTax::new(dec!(0.2))).unwrap();
        assert!(taxed
            .contains(&TaxedMoney::new(money(20, "EUR"), money(24, "EUR")).unwrap())
            .unwrap());

        let dynamic = Priced::from(taxed);
        let shifted = dynamic.add(&money(5, "EUR").into()).unwrap();
        let shifted = TaxedMoneyRange::try_from(shifted).unwrap();
        assert_eq!(shifted.start().gross(), money(17, "EUR"));
        assert_eq!(shifted.stop().net(), money(35, "EUR"));
    }
}
