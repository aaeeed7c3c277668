// ============================================================================
// Price Errors
// Error types for money arithmetic, comparison and construction
// ============================================================================

use crate::currency::Currency;

/// Coarse classification of a [`PriceError`].
///
/// Lets callers branch on the failure category without matching every
/// payload-carrying variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Two currency-bearing operands used different currencies
    CurrencyMismatch,
    /// The operation does not know how to combine the operand kinds
    UnsupportedOperand,
    /// Membership or extraction received the wrong value kind
    TypeMismatch,
    /// A compound value's invariant was violated at construction
    Construction,
    /// Decimal arithmetic failed (overflow, division by zero, empty sum)
    Arithmetic,
}

/// Errors that can occur while building or combining prices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    /// Operands carry different currency codes
    #[error("cannot {operation} amounts in '{left}' and '{right}'")]
    CurrencyMismatch {
        operation: &'static str,
        left: Currency,
        right: Currency,
    },

    /// Operand kinds cannot be combined by this operation
    #[error("unsupported operand kinds for {operation}: {left} and {right}")]
    UnsupportedOperand {
        operation: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// A value of the wrong kind was supplied
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Compound value invariant violated
    #[error("invalid construction: {reason}")]
    Construction { reason: String },

    /// Input could not be represented exactly as a decimal
    #[error("invalid amount: '{input}' is not an exact decimal")]
    InvalidAmount { input: String },

    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Result exceeded the decimal range
    #[error("arithmetic overflow: result exceeded decimal range")]
    Overflow,

    /// `sum` was called without any values
    #[error("cannot sum an empty sequence: no currency to build a zero from")]
    EmptySum,
}

impl PriceError {
    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PriceError::CurrencyMismatch { .. } => ErrorKind::CurrencyMismatch,
            PriceError::UnsupportedOperand { .. } => ErrorKind::UnsupportedOperand,
            PriceError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            PriceError::Construction { .. } | PriceError::InvalidAmount { .. } => {
                ErrorKind::Construction
            },
            PriceError::DivisionByZero | PriceError::Overflow | PriceError::EmptySum => {
                ErrorKind::Arithmetic
            },
        }
    }

    pub(crate) fn construction(reason: impl Into<String>) -> Self {
        PriceError::Construction {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(
        operation: &'static str,
        left: &'static str,
        right: &'static str,
    ) -> Self {
        PriceError::UnsupportedOperand {
            operation,
            left,
            right,
        }
    }
}

/// Result type alias for price operations
pub type PriceResult<T> = Result<T, PriceError>;

/// Fails with `CurrencyMismatch` unless both currencies are equal.
#[inline]
pub(crate) fn ensure_same_currency(
    operation: &'static str,
    left: Currency,
    right: Currency,
) -> PriceResult<()> {
    if left == right {
        Ok(())
    } else {
        Err(PriceError::CurrencyMismatch {
            operation,
            left,
            right,
        })
    }
}
