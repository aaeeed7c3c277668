// ============================================================================
// Currency Module
// Currency codes and the currency-fraction (minor unit) provider
// ============================================================================

mod fractions;

pub use fractions::{digits_for, is_known, DEFAULT_DIGITS};

use std::fmt;
use ustr::Ustr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An opaque currency code (e.g. ISO 4217 `"USD"`, or `"BTC"`).
///
/// Codes are interned, so the type is `Copy` and comparisons are pointer
/// cheap. No normalization happens: `"usd"` and `"USD"` are different
/// currencies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Currency(Ustr);

impl Currency {
    /// Create a currency from its code.
    #[inline]
    pub fn new(code: &str) -> Self {
        Self(Ustr::from(code))
    }

    /// The currency code.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Canonical number of fractional digits for this currency.
    ///
    /// Falls back to [`DEFAULT_DIGITS`] for codes missing from the table.
    #[inline]
    pub fn digits(&self) -> u32 {
        digits_for(self.as_str())
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::new(&code)
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency('{}')", self.0)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_equality() {
        assert_eq!(Currency::new("USD"), Currency::from("USD"));
        assert_ne!(Currency::new("USD"), Currency::new("usd"));
        assert_eq!(Currency::new("EUR"), "EUR");
    }

    #[test]
    fn test_currency_display() {
        let btc = Currency::from("BTC".to_string());
        assert_eq!(btc.to_string(), "BTC");
        assert_eq!(format!("{:?}", btc), "Currency('BTC')");
    }

    #[test]
    fn test_currency_digits() {
        assert_eq!(Currency::new("USD").digits(), 2);
        assert_eq!(Currency::new("JPY").digits(), 0);
        assert_eq!(Currency::new("BTC").digits(), DEFAULT_DIGITS);
    }
}
