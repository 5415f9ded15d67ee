//! Structured diagnostic events.
//!
//! Every soft failure and warning becomes one [`Diagnostic`] recorded by the
//! runtime in order, so tests can assert on kinds instead of scraping text.
//! The rendered message is also written as one free-text line to the error
//! stream, which no consumer parses.

use crate::errors::RuntimeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagKind {
    NegativeSize,
    AllocFailed,
    NullArray,
    IndexOutOfBounds,
    UnknownInputType,
    ReadFailed,
    /// Float input is transported as a raw bit pattern; downstream code
    /// sees an integer-shaped cell.
    FloatBitsTransport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagKind,
    /// The full line written to the error stream.
    pub message: String,
}

impl Diagnostic {
    pub fn from_error(err: &RuntimeError) -> Self {
        Self {
            kind: err.diag_kind(),
            message: format!("Error: {err}."),
        }
    }

    pub fn float_bits_warning() -> Self {
        Self {
            kind: DiagKind::FloatBitsTransport,
            message: "Warning: Reading float, returning bit pattern as integer.".to_string(),
        }
    }
}
