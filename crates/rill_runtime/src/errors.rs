//! Unified runtime error type returned by every primitive.
//!
//! Each variant is a failure kind plus the context fields the diagnostic
//! stream renders. Callers decide whether a failure aborts or continues;
//! the legacy calling-convention facade maps these back onto the original
//! fatal-vs-soft split.

use thiserror::Error;

use crate::runtime::DiagKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("array_new called with negative size: {size}")]
    NegativeSize { size: i64 },

    #[error("allocation of {requested} bytes failed in {context}")]
    AllocFailed { context: &'static str, requested: usize },

    #[error("{op} called with NULL array pointer")]
    NullArray { op: &'static str },

    #[error("array index {index} out of bounds for {op} (size {size})")]
    IndexOutOfBounds { op: &'static str, index: i64, size: i64 },

    #[error("unknown type requested for input: {requested}")]
    UnknownInputType { requested: String },

    #[error("failed to read a line from input")]
    ReadFailed,
}

impl RuntimeError {
    pub fn diag_kind(&self) -> DiagKind {
        match self {
            Self::NegativeSize { .. } => DiagKind::NegativeSize,
            Self::AllocFailed { .. } => DiagKind::AllocFailed,
            Self::NullArray { .. } => DiagKind::NullArray,
            Self::IndexOutOfBounds { .. } => DiagKind::IndexOutOfBounds,
            Self::UnknownInputType { .. } => DiagKind::UnknownInputType,
            Self::ReadFailed => DiagKind::ReadFailed,
        }
    }

    /// Whether the legacy calling convention treats this failure as fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::AllocFailed { .. })
    }
}
