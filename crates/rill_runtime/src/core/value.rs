//! Runtime value representation.
//!
//! Two layers exist side by side. [`Cell`] is the wire currency of the
//! calling convention: a bare 64-bit scalar with no discriminant, whose
//! meaning depends on what produced it. [`Value`] is the tagged form chosen
//! at allocation time by the producer, so printing can dispatch directly
//! instead of guessing.

use crate::core::arena::Handle;

/// Bounds of the literal-integer range. Cells inside it are always read as
/// integers; the range is carved out so it cannot collide with handle
/// encodings.
pub const SMALL_INT_MIN: i64 = -65536;
pub const SMALL_INT_MAX: i64 = 65536;

/// A single untagged 64-bit runtime cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(pub i64);

impl Cell {
    pub const NULL: Cell = Cell(0);

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// True if the cell's integer interpretation always wins.
    #[inline]
    pub fn is_small_int(self) -> bool {
        self.0 >= SMALL_INT_MIN && self.0 <= SMALL_INT_MAX
    }
}

/// A tagged runtime value. The tag is picked by whichever primitive produced
/// the value and travels with it from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Array(Handle),
    Str(Handle),
    Obj(Handle),
}

impl Value {
    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Array(_) => "array",
            Value::Str(_) => "string",
            Value::Obj(_) => "object",
        }
    }

    /// The handle behind a heap-backed value, if any.
    pub fn handle(&self) -> Option<Handle> {
        match self {
            Value::Int(_) => None,
            Value::Array(h) | Value::Str(h) | Value::Obj(h) => Some(*h),
        }
    }

    /// Lower to the untagged cell convention. Integers keep their literal
    /// bits; heap values lower to their handle encoding. Note that an
    /// integer outside the small range becomes indistinguishable from a
    /// pointer once lowered, exactly as in the untagged design.
    pub fn to_cell(self) -> Cell {
        match self {
            Value::Int(i) => Cell(i),
            Value::Array(h) | Value::Str(h) | Value::Obj(h) => h.to_cell(),
        }
    }
}
