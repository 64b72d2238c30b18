//! Domain Errors
//!
//! A single error type shared by every layer. Encoding a value outside a
//! codec's domain, or building a codec with parameters below their
//! minimum, produces one of these. Decoding a natural number never does,
//! except where a decoded length exceeds the configured resource limit.

use thiserror::Error;

/// Invalid domain value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A natural number was built from a negative value
    #[error("negative value {0} is not a natural number")]
    Negative(String),

    /// Subtraction would produce a negative result
    #[error("subtraction underflow: {minuend} - {subtrahend} is negative")]
    Underflow { minuend: String, subtrahend: String },

    /// Text that does not parse as a decimal natural number
    #[error("{0:?} is not a decimal natural number")]
    NotANumber(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("logarithm of zero is undefined")]
    LogarithmOfZero,

    /// Tuple arity below the minimum of 1
    #[error("arity must be at least {minimum}, got {actual}")]
    ArityTooSmall { minimum: usize, actual: usize },

    /// A tuple of the wrong length was handed to a fixed-arity codec
    #[error("expected a tuple of arity {expected}, got {actual} elements")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("alphabet must have at least 2 symbols, got {0}")]
    AlphabetTooSmall(usize),

    /// The same symbol appears twice in an alphabet
    #[error("symbol at alphabet index {0} is a duplicate")]
    DuplicateSymbol(usize),

    #[error("symbol at position {position} is not in the alphabet")]
    SymbolNotInAlphabet { position: usize },

    #[error("dilution must be at least 1, got {0}")]
    DilutionTooSmall(usize),

    #[error("denominator must not be zero")]
    ZeroDenominator,

    /// A continued-fraction term is too long to emit as a bit run
    #[error("continued fraction term {0} is too large to encode")]
    RunTooLong(String),

    /// A decoded list is longer than the configured limit
    #[error("decoded length {length} exceeds the limit of {limit}")]
    LengthLimitExceeded { length: String, limit: usize },

    /// Fraction digits must be non-empty ASCII digits without a trailing zero
    #[error("invalid fraction digits {0:?}")]
    InvalidFraction(String),

    #[error("code point {0:#X} is not a Unicode scalar value")]
    NotAScalarValue(u32),
}

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, DomainError>;
