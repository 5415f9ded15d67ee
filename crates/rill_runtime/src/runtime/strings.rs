//! String building. Every operation allocates a fresh block; strings are
//! never interned or mutated in place.

use crate::core::text;
use crate::core::value::{Cell, Value};
use crate::errors::RuntimeError;

use super::core::Runtime;

impl Runtime {
    /// Byte-wise concatenation of `a` then `b` into a fresh string block.
    /// A null cell reads as the empty string; so does a non-null cell with
    /// no live block behind it (the untagged design dereferenced it).
    pub fn concat(&mut self, a: Cell, b: Cell) -> Result<Value, RuntimeError> {
        let mut bytes = Vec::new();
        self.append_str_cell(&mut bytes, a);
        self.append_str_cell(&mut bytes, b);
        match self.arena.alloc_str(&bytes, "string_concat") {
            Ok(handle) => Ok(Value::Str(handle)),
            Err(err) => self.fail(err),
        }
    }

    /// Decimal representation of any 64-bit signed integer, sign included,
    /// in a fresh string block.
    pub fn int_to_string(&mut self, value: i64) -> Result<Value, RuntimeError> {
        let mut buf = itoa::Buffer::new();
        let digits = buf.format(value);
        match self.arena.alloc_str(digits.as_bytes(), "int_to_string") {
            Ok(handle) => Ok(Value::Str(handle)),
            Err(err) => self.fail(err),
        }
    }

    /// Produce a tagged string value from Rust text. This is the
    /// producer-chooses-the-tag entry point generated code uses for string
    /// literals.
    pub fn new_string(&mut self, s: &str) -> Result<Value, RuntimeError> {
        match self.arena.alloc_str(s.as_bytes(), "new_string") {
            Ok(handle) => Ok(Value::Str(handle)),
            Err(err) => self.fail(err),
        }
    }

    /// Produce an opaque heap value the printer falls through on.
    pub fn new_object(&mut self, bytes: &[u8]) -> Result<Value, RuntimeError> {
        match self.arena.alloc_opaque(bytes) {
            Ok(handle) => Ok(Value::Obj(handle)),
            Err(err) => self.fail(err),
        }
    }

    fn append_str_cell(&self, out: &mut Vec<u8>, cell: Cell) {
        if cell.is_null() {
            return;
        }
        if let Some(handle) = self.arena.resolve(cell) {
            out.extend_from_slice(text::str_bytes(self.arena.get(handle)));
        }
    }
}
