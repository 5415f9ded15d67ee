mod array;
mod config;
mod core;
mod diag;
pub mod heuristic;
mod input;
mod legacy;
mod print;
mod strings;

pub use config::RuntimeConfig;
pub use diag::{DiagKind, Diagnostic};
pub use self::core::Runtime;
