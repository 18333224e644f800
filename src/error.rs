// error.rs

use thiserror::Error;

/// The inputs are valid numbers but the operation is undefined for them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("cannot compute square root of negative number {0}")]
    NegativeRadicand(f64),
    #[error("pow({base}, {exponent}) is not a real number")]
    PowerDomain { base: f64, exponent: f64 },
    #[error("pow({base}, {exponent}) is too large to represent")]
    PowerOverflow { base: f64, exponent: f64 },
}

/// Everything that can go wrong inside one loop iteration. None of these end
/// the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("'{0}' is not a valid option, please try again.")]
    UnknownSelection(String),
    #[error("invalid number '{input}' for argument {index}")]
    InvalidNumber { index: usize, input: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("{operation} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        operation: &'static str,
        expected: usize,
        got: usize,
    },
}
