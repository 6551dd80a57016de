//! Error types for HueKit color parsing

use thiserror::Error;

/// Reasons a textual color value is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Value does not begin with `#`
    #[error("color must start with '#'")]
    MissingHash,

    /// Value is not `#` plus six digits
    #[error("color must be 7 characters (#rrggbb), got {0}")]
    BadLength(usize),

    /// One of the six digit positions is not a hexadecimal digit.
    /// Position is the byte offset into the input string.
    #[error("invalid hex digit at position {0}")]
    InvalidDigit(usize),
}
