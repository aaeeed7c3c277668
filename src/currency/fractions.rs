// ============================================================================
// Currency Fractions
// Static ISO 4217 minor-unit table (CLDR currency data)
// ============================================================================

use std::collections::HashMap;
use std::sync::LazyLock;

/// Fractional digits used for currencies missing from the table.
pub const DEFAULT_DIGITS: u32 = 2;

/// Currencies whose accounting digits differ from the default, plus the
/// common two-digit codes listed explicitly.
const FRACTION_SEED: &[(&str, u32)] = &[
    ("ADP", 0),
    ("AFN", 0),
    ("ALL", 0),
    ("AMD", 2),
    ("AUD", 2),
    ("BHD", 3),
    ("BIF", 0),
    ("BRL", 2),
    ("BYN", 2),
    ("BYR", 0),
    ("CAD", 2),
    ("CHF", 2),
    ("CLF", 4),
    ("CLP", 0),
    ("CNY", 2),
    ("COP", 2),
    ("CRC", 2),
    ("CZK", 2),
    ("DJF", 0),
    ("DKK", 2),
    ("ESP", 0),
    ("EUR", 2),
    ("GBP", 2),
    ("GNF", 0),
    ("GYD", 2),
    ("HUF", 2),
    ("IDR", 2),
    ("INR", 2),
    ("IQD", 0),
    ("IRR", 0),
    ("ISK", 0),
    ("ITL", 0),
    ("JOD", 3),
    ("JPY", 0),
    ("KMF", 0),
    ("KPW", 0),
    ("KRW", 0),
    ("KWD", 3),
    ("LAK", 0),
    ("LBP", 0),
    ("LUF", 0),
    ("LYD", 3),
    ("MGA", 0),
    ("MGF", 0),
    ("MMK", 0),
    ("MNT", 2),
    ("MRO", 0),
    ("MUR", 2),
    ("MXN", 2),
    ("NOK", 2),
    ("OMR", 3),
    ("PKR", 2),
    ("PLN", 2),
    ("PYG", 0),
    ("RSD", 0),
    ("RWF", 0),
    ("SEK", 2),
    ("SLE", 2),
    ("SLL", 0),
    ("SOS", 0),
    ("STD", 0),
    ("SYP", 0),
    ("TMM", 0),
    ("TND", 3),
    ("TRL", 0),
    ("TWD", 2),
    ("TZS", 2),
    ("UGX", 0),
    ("USD", 2),
    ("UYI", 0),
    ("UYW", 4),
    ("UZS", 2),
    ("VEF", 2),
    ("VND", 0),
    ("VUV", 0),
    ("XAF", 0),
    ("XOF", 0),
    ("XPF", 0),
    ("YER", 0),
    ("ZMK", 0),
    ("ZWD", 0),
];

static FRACTIONS: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| FRACTION_SEED.iter().copied().collect());

/// Canonical number of fractional digits for `code`.
///
/// Unknown codes get [`DEFAULT_DIGITS`].
pub fn digits_for(code: &str) -> u32 {
    match FRACTIONS.get(code) {
        Some(digits) => *digits,
        None => {
            tracing::trace!(currency = code, "unknown currency, using default fraction digits");
            DEFAULT_DIGITS
        },
    }
}

/// Whether `code` has an explicit entry in the fraction table.
pub fn is_known(code: &str) -> bool {
    FRACTIONS.contains_key(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digits() {
        assert_eq!(digits_for("USD"), 2);
        assert_eq!(digits_for("JPY"), 0);
        assert_eq!(digits_for("KWD"), 3);
        assert_eq!(digits_for("CLF"), 4);
    }

    #[test]
    fn test_default_fallback() {
        assert!(!is_known("BTC"));
        assert_eq!(digits_for("BTC"), DEFAULT_DIGITS);
        assert_eq!(digits_for(""), DEFAULT_DIGITS);
    }

    #[test]
    fn test_seed_has_no_duplicates() {
        assert_eq!(FRACTIONS.len(), FRACTION_SEED.len());
    }
}
