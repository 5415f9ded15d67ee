//! Rill language runtime support layer.
//!
//! Generated code calls into this crate for printing, string building,
//! console input, and array access. Values are produced tagged ([`Value`]);
//! the untagged cell convention ([`Cell`]) is kept for code emitted by older
//! compiler revisions and is printed via heuristic type recovery.

#![allow(clippy::manual_range_contains)]
#![allow(clippy::new_without_default)]

pub mod core;
pub mod errors;
mod runtime;
mod util;

// Re-exports from core/
pub use core::arena::{Arena, CELL_HANDLE_BASE, Handle};
pub use core::value::{Cell, SMALL_INT_MAX, SMALL_INT_MIN, Value};

// Re-exports from runtime/
pub use runtime::heuristic::{self, CellClass};
pub use runtime::{DiagKind, Diagnostic, Runtime, RuntimeConfig};

// Re-exports from util/
pub use util::{Console, MemConsole, StdConsole};

pub use errors::RuntimeError;
