//! Array primitives.
//!
//! Bounds checks are mandatory on every access and are never skipped. A
//! failed load or store leaves the array untouched.

use crate::core::arena::Handle;
use crate::core::value::{Cell, Value};
use crate::errors::RuntimeError;

use super::core::Runtime;

impl Runtime {
    /// Allocate a zero-initialized array of exactly `size` cells.
    pub fn array_new(&mut self, size: i64) -> Result<Value, RuntimeError> {
        match self.arena.alloc_array(size) {
            Ok(handle) => Ok(Value::Array(handle)),
            Err(err) => self.fail(err),
        }
    }

    /// Read the cell at `index`, unchanged.
    pub fn array_load(&mut self, arr: Cell, index: i64) -> Result<Cell, RuntimeError> {
        let (handle, size) = self.resolve_array(arr, "array_load")?;
        if index < 0 || index >= size {
            return self.fail(RuntimeError::IndexOutOfBounds {
                op: "array_load",
                index,
                size,
            });
        }
        Ok(Cell(self.arena.probe_cell(handle, index)))
    }

    /// Overwrite the cell at `index` in place.
    pub fn array_store(&mut self, arr: Cell, index: i64, value: Cell) -> Result<(), RuntimeError> {
        let (handle, size) = self.resolve_array(arr, "array_store")?;
        if index < 0 || index >= size {
            return self.fail(RuntimeError::IndexOutOfBounds {
                op: "array_store",
                index,
                size,
            });
        }
        self.arena.write_cell(handle, index, value.0);
        Ok(())
    }

    /// Decode an array argument. The null cell, a cell with no live block
    /// behind it, and a block too short to carry a length header all count
    /// as a null array.
    fn resolve_array(
        &mut self,
        arr: Cell,
        op: &'static str,
    ) -> Result<(Handle, i64), RuntimeError> {
        let Some(handle) = self.arena.resolve(arr) else {
            return self.fail(RuntimeError::NullArray { op });
        };
        match self.arena.header(handle) {
            Some(size) => Ok((handle, size)),
            None => self.fail(RuntimeError::NullArray { op }),
        }
    }
}
