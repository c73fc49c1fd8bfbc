// ============================================================================
// Numeric Errors
// Error types for ledger decimal construction, arithmetic and encoding
// ============================================================================

use thiserror::Error;

/// Errors that can occur while building, combining or encoding a ledger decimal.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string or value could not be parsed
    #[error("invalid input: could not parse value")]
    InvalidInput,
    /// Value is below zero where a ledger amount is required
    #[error("invalid input: value is negative")]
    Negative,
    /// Integer part does not fit in 42 bits
    #[error("invalid input: integer part must be below 2^42")]
    OutOfRange,
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Argument has no defined result (e.g. the 0th root)
    #[error("degenerate argument: {0}")]
    DegenerateArgument(&'static str),
    /// Newton-Raphson iteration hit its cap before meeting the margin
    #[error("root did not converge within {iterations} iterations")]
    NonConvergence { iterations: u32 },
    /// Root finding configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NumericError {
    /// True for the errors raised by rejecting an input value: malformed,
    /// negative, out of range, or a zero divisor.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            NumericError::InvalidInput
                | NumericError::Negative
                | NumericError::OutOfRange
                | NumericError::DivisionByZero
        )
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
