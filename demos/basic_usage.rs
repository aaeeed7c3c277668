// ============================================================================
// Basic Usage Example
// ============================================================================

use prices::modifiers::create_from_config;
use prices::prelude::*;
use rust_decimal_macros::dec;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> PriceResult<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already installed");
    }

    println!("=== Prices Example ===\n");

    // Line items and a subtotal
    let items = [
        Money::new(dec!(12.49), "EUR"),
        Money::new(dec!(7.5), "EUR"),
        Money::new(dec!(0.99), "EUR"),
    ];
    let subtotal = sum(items)?;
    println!("Subtotal: {}", subtotal);

    // Tax on top of the net subtotal
    let vat = LinearTax::new(dec!(0.23)).with_name("VAT");
    let price: TaxedMoney = subtotal.modify_as(&vat)?;
    println!("With {}: {}", vat, price);
    println!("Tax: {}", price.tax()?.quantize());

    // Discounts, floored at zero
    let discounted: TaxedMoney = price.modify_as(&percentage_discount(15))?;
    println!("15% off: {}", discounted.quantize());

    let voucher = FixedDiscount::new(Money::from_integer(50, "EUR")).with_name("voucher");
    let free: TaxedMoney = discounted.modify_as(&voucher)?;
    println!("After {}: {}\n", voucher, free);

    // Ranges of prices
    let range = MoneyRange::new(Money::from_integer(10, "USD"), Money::from_integer(30, "USD"))?;
    let taxed_range: TaxedMoneyRange = range.modify_as(&FlatTax::new(dec!(0.08)))?;
    println!("Range: {}", range);
    println!("Taxed range: {}", taxed_range);
    let probe = TaxedMoney::untaxed(Money::from_integer(25, "USD"));
    println!("Contains {}? {}\n", probe, taxed_range.contains(&probe)?);

    // Currency-aware rounding
    for currency in ["USD", "JPY", "BHD"] {
        let money = Money::new(dec!(1234.5678), currency);
        println!("{} -> {}", money, money.quantize());
    }

    // Mixing currencies is an error, not a conversion
    match Money::from_integer(1, "USD").checked_add(&Money::from_integer(1, "EUR")) {
        Ok(total) => println!("Unexpected total: {}", total),
        Err(err) => println!("\nRejected: {} ({:?})", err, err.kind()),
    }

    // Modifier pipelines from configuration
    let config = PricingConfig::vat_inclusive(dec!(0.2));
    let chain = create_from_config(&config)?;
    let shelf_price: TaxedMoney = Money::from_integer(120, "GBP").modify_as(&chain)?;
    println!("Shelf price with VAT included: {}", shelf_price);

    Ok(())
}
