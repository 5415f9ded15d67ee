//! Printing.
//!
//! [`Runtime::print`] dispatches directly on the value's tag.
//! [`Runtime::print_cell`] recovers a kind heuristically first. Both render
//! through the same functions, so for any well-formed value the two emit
//! identical bytes, which is what migration compatibility tests compare.

use crate::core::arena::{Arena, Handle};
use crate::core::text;
use crate::core::value::{Cell, Value};

use super::core::Runtime;
use super::heuristic::{self, CellClass};

impl Runtime {
    /// Print a tagged value: one line, flushed.
    pub fn print(&mut self, value: Value) {
        let line = match value {
            Value::Int(i) => render_int(i),
            Value::Array(h) => render_array(&self.arena, h),
            Value::Str(h) => render_str(self.arena.get(h)),
            Value::Obj(h) => render_obj(h.to_cell()),
        };
        self.write_line(&line);
    }

    /// Print an untagged cell via heuristic type recovery: one line, flushed.
    pub fn print_cell(&mut self, cell: Cell) {
        let line = match heuristic::classify(cell, &self.arena) {
            CellClass::Int(i) => render_int(i),
            CellClass::Array(h) => render_array(&self.arena, h),
            CellClass::Str(h) => render_str(self.arena.get(h)),
            CellClass::Obj => render_obj(cell),
        };
        self.write_line(&line);
    }
}

fn render_int(i: i64) -> String {
    let mut out = String::new();
    text::push_i64(&mut out, i);
    out
}

/// Bracketed, comma-separated element cells, each as a raw decimal with no
/// recursive interpretation.
fn render_array(arena: &Arena, handle: Handle) -> String {
    let len = arena.header(handle).unwrap_or(0).max(0);
    let mut out = String::from("[");
    for slot in 0..len {
        if slot > 0 {
            out.push_str(", ");
        }
        text::push_i64(&mut out, arena.probe_cell(handle, slot));
    }
    out.push(']');
    out
}

fn render_str(block: &[u8]) -> String {
    String::from_utf8_lossy(text::str_bytes(block)).into_owned()
}

fn render_obj(cell: Cell) -> String {
    format!("<Object at 0x{:x}>", cell.0)
}
