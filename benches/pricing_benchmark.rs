// ============================================================================
// Pricing Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - Checked money and price arithmetic
// 2. Quantization - Currency-aware rounding
// 3. Modifiers - Tax and discount application, single and chained
// 4. Summation - Folding baskets of line items
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use prices::prelude::*;
use rust_decimal_macros::dec;
use std::hint::black_box;

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_money_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("money_arithmetic");

    let a = Money::new(dec!(19.99), "USD");
    let b = Money::new(dec!(5.01), "USD");

    group.bench_function("checked_add", |bench| {
        bench.iter(|| black_box(black_box(a).checked_add(&black_box(b))))
    });

    group.bench_function("checked_mul", |bench| {
        bench.iter(|| black_box(black_box(a).checked_mul(dec!(1.23))))
    });

    group.bench_function("dynamic_add", |bench| {
        let left = Priced::from(a);
        let right = Operand::from(b);
        bench.iter(|| black_box(black_box(left).add(&right)))
    });

    group.finish();
}

// ============================================================================
// Quantization Benchmarks
// ============================================================================

fn benchmark_quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantize");

    for currency in ["USD", "JPY", "BHD", "XYZ"].iter() {
        let money = Money::new(dec!(1234.56789), *currency);
        group.bench_with_input(BenchmarkId::new("money", currency), &money, |bench, money| {
            bench.iter(|| black_box(money.quantize()))
        });
    }

    group.finish();
}

// ============================================================================
// Modifier Benchmarks
// ============================================================================

fn benchmark_modifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("modifiers");

    let price = TaxedMoney::untaxed(Money::new(dec!(99.99), "EUR"));
    let range = TaxedMoneyRange::new(
        price,
        TaxedMoney::untaxed(Money::new(dec!(199.99), "EUR")),
    )
    .expect("valid range");

    let linear = LinearTax::new(dec!(0.23)).with_name("VAT");
    let flat = FlatTax::new(dec!(0.2)).keep_gross();
    let fractional = FractionalDiscount::new(dec!(0.15));

    group.bench_function("linear_tax", |bench| {
        bench.iter(|| black_box(price.modify(&linear)))
    });
    group.bench_function("flat_tax_keep_gross", |bench| {
        bench.iter(|| black_box(price.modify(&flat)))
    });
    group.bench_function("fractional_discount", |bench| {
        bench.iter(|| black_box(price.modify(&fractional)))
    });
    group.bench_function("fractional_discount_range", |bench| {
        bench.iter(|| black_box(range.modify(&fractional)))
    });

    for length in [1usize, 4, 16].iter() {
        let chain = (0..*length).fold(ModifierChain::new(), |chain, i| {
            if i % 2 == 0 {
                chain.then(LinearTax::new(dec!(0.05)))
            } else {
                chain.then(FixedDiscount::new(Money::new(dec!(0.50), "EUR")))
            }
        });
        group.bench_with_input(BenchmarkId::new("chain", length), &chain, |bench, chain| {
            bench.iter(|| black_box(price.modify(chain)))
        });
    }

    group.finish();
}

// ============================================================================
// Summation Benchmarks
// ============================================================================

fn benchmark_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for size in [10, 100, 1000].iter() {
        let items: Vec<Money> = (0..*size)
            .map(|i| Money::new(Decimal::new(i64::from(i) * 137 + 99, 2), "PLN"))
            .collect();

        group.bench_with_input(BenchmarkId::new("money", size), &items, |bench, items| {
            bench.iter(|| black_box(sum(items.iter().copied())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_money_arithmetic,
    benchmark_quantize,
    benchmark_modifiers,
    benchmark_sum,
);
criterion_main!(benches);
