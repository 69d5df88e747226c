use crate::format::QFormat;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixError {
    /// `reinterpret` asked for a different total bit width.
    #[error("Width mismatch: expected {expected} bits, got {got}")]
    WidthMismatch { expected: i32, got: i32 },

    /// `copy_from` across differing precisions.
    #[error("Format mismatch: {expected} vs {got}")]
    FormatMismatch { expected: QFormat, got: QFormat },

    /// Non-hex byte in a hex import.
    #[error("Invalid character {0:?} in input")]
    InvalidCharacter(char),
}
