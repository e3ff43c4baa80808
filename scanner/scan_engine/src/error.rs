//! Scanner error types.
//!
//! Every failure carries the same three facts:
//! - WHAT: `kind` describing what went wrong
//! - WHERE: `pos`, the byte offset at which the offending token starts
//! - WHICH: `token`, the offending text as the token window saw it
//!
//! Errors are deterministic for a given input and cursor state, so there is
//! no retry or recovery information attached.

use thiserror::Error;

/// Result alias used by every fallible scanner operation.
pub type Result<T> = std::result::Result<T, ScanError>;

/// A scanner error with the offending token for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at offset {pos}: `{token}`")]
pub struct ScanError {
    /// WHAT went wrong.
    pub kind: ScanErrorKind,
    /// The token that caused the failure (may be empty at end of input).
    pub token: String,
    /// Byte offset of the token start.
    pub pos: usize,
}

/// What kind of scanner error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ScanErrorKind {
    // === Cursor Errors ===
    /// Cursor or token start outside the text, or inside a multi-byte character.
    #[error("position out of range")]
    OutOfRange,

    // === Matching Errors ===
    /// A required character, character set or whitespace was not found.
    #[error("expected {expected}")]
    SpecNotFound { expected: String },
    /// A name abbreviation matched more than one candidate.
    #[error("ambiguous name")]
    SpecAmbiguous,
    /// Trailing content remained where the input should have ended.
    #[error("end of input expected")]
    EndExpected,

    // === Literal Errors ===
    /// Integer literal absent or malformed.
    #[error("number expected")]
    NumberExpected,
    /// Decimal (digits only) literal absent or malformed.
    #[error("decimal number expected")]
    DecimalNumberExpected,
    /// Floating point literal absent or malformed.
    #[error("floating point number expected")]
    FloatNumberExpected,
    /// A quoted string was required.
    #[error("string expected")]
    StringExpected,
    /// A quoted string ran into the end of input.
    #[error("unterminated string")]
    StringEndExpected,
    /// Parsed magnitude exceeds the caller-supplied maximum.
    #[error("number exceeds maximum {max}")]
    Overflow { max: u64 },

    // === Argument Errors ===
    /// A required argument was missing.
    #[error("argument must not be null")]
    ArgumentNull,
    /// An argument was outside its valid range.
    #[error("argument out of range")]
    ArgumentOutOfRange,
}

impl ScanError {
    /// Create an error from its parts.
    pub fn new(kind: ScanErrorKind, token: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            token: token.into(),
            pos,
        }
    }

    /// Create an out-of-range error at `pos`.
    #[cold]
    pub fn out_of_range(pos: usize) -> Self {
        Self::new(ScanErrorKind::OutOfRange, String::new(), pos)
    }

    /// Create an error for a required match that was not found.
    #[cold]
    pub fn spec_not_found(expected: impl Into<String>, token: impl Into<String>, pos: usize) -> Self {
        Self::new(
            ScanErrorKind::SpecNotFound {
                expected: expected.into(),
            },
            token,
            pos,
        )
    }

    /// Create an ambiguous-name error for `chunk`.
    #[cold]
    pub fn spec_ambiguous(chunk: impl Into<String>, pos: usize) -> Self {
        Self::new(ScanErrorKind::SpecAmbiguous, chunk, pos)
    }

    /// Create an end-expected error for the trailing `token`.
    #[cold]
    pub fn end_expected(token: impl Into<String>, pos: usize) -> Self {
        Self::new(ScanErrorKind::EndExpected, token, pos)
    }

    /// Create an overflow error for a value above `max`.
    #[cold]
    pub fn overflow(max: u64, token: impl Into<String>, pos: usize) -> Self {
        Self::new(ScanErrorKind::Overflow { max }, token, pos)
    }

    /// Create a missing-argument error.
    #[cold]
    pub fn argument_null(argument: &str) -> Self {
        Self::new(ScanErrorKind::ArgumentNull, argument, 0)
    }

    /// Create an argument-out-of-range error for `pos`.
    #[cold]
    pub fn argument_out_of_range(pos: usize) -> Self {
        Self::new(ScanErrorKind::ArgumentOutOfRange, String::new(), pos)
    }

    /// Returns `true` for the numeric literal error kinds.
    pub fn is_number_error(&self) -> bool {
        matches!(
            self.kind,
            ScanErrorKind::NumberExpected
                | ScanErrorKind::DecimalNumberExpected
                | ScanErrorKind::FloatNumberExpected
                | ScanErrorKind::Overflow { .. }
        )
    }
}
