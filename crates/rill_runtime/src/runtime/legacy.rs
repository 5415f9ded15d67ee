//! Legacy calling-convention facade.
//!
//! Code emitted before the tagged representation exchanges bare cells and
//! expects the original failure policy: allocation failure terminates the
//! process, everything else defaults to 0 or null after a diagnostic. These
//! entry points rebuild that policy on top of the unified error type.

use crate::core::value::Cell;

use super::core::Runtime;

impl Runtime {
    pub fn legacy_print(&mut self, cell: Cell) {
        self.print_cell(cell);
    }

    pub fn legacy_concat(&mut self, a: Cell, b: Cell) -> Cell {
        match self.concat(a, b) {
            Ok(value) => value.to_cell(),
            Err(_) => self.abort(),
        }
    }

    pub fn legacy_int_to_string(&mut self, value: i64) -> Cell {
        match self.int_to_string(value) {
            Ok(value) => value.to_cell(),
            Err(_) => self.abort(),
        }
    }

    pub fn legacy_read_input(&mut self, expected_type: &str) -> Cell {
        match self.read_input(expected_type) {
            Ok(cell) => cell,
            Err(err) if err.is_fatal() => self.abort(),
            Err(_) => Cell::NULL,
        }
    }

    pub fn legacy_array_new(&mut self, size: i64) -> Cell {
        match self.array_new(size) {
            Ok(value) => value.to_cell(),
            Err(_) => Cell::NULL,
        }
    }

    pub fn legacy_array_load(&mut self, arr: Cell, index: i64) -> Cell {
        self.array_load(arr, index).unwrap_or(Cell::NULL)
    }

    pub fn legacy_array_store(&mut self, arr: Cell, index: i64, value: Cell) {
        let _ = self.array_store(arr, index, value);
    }

    // The diagnostic was already written when the error was recorded.
    fn abort(&mut self) -> ! {
        self.console.flush_out();
        std::process::exit(1)
    }
}
