//! Heuristic type recovery for untagged cells.
//!
//! An untagged cell never self-describes; this module guesses its kind from
//! the bit pattern and the referenced block, in a strict priority order.
//! The ordering and thresholds here are the contract, not "correct" type
//! recovery: a block whose header happens to decode to a plausible length,
//! or whose leading bytes are coincidentally printable, is misclassified,
//! and that misclassification is specified behavior.

use crate::core::arena::{Arena, Handle};
use crate::core::value::Cell;

/// A block header only counts as an array length below this bound.
pub const ARRAY_LEN_PROBE_MAX: i64 = 1000;

/// How many leading bytes the string probe examines.
pub const STR_SCAN_MAX: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// Literal integer in the carved-out range. Always wins.
    Int(i64),
    /// Block whose header reads as a length in `[0, ARRAY_LEN_PROBE_MAX)`.
    Array(Handle),
    /// Block whose leading bytes are all printable ASCII up to a NUL.
    Str(Handle),
    /// Everything else, including cells that resolve to no live block.
    Obj,
}

pub fn classify(cell: Cell, arena: &Arena) -> CellClass {
    if cell.is_small_int() {
        return CellClass::Int(cell.0);
    }
    let Some(handle) = arena.resolve(cell) else {
        return CellClass::Obj;
    };
    // Blocks shorter than a full header cannot announce a length.
    if let Some(len) = arena.header(handle) {
        if len >= 0 && len < ARRAY_LEN_PROBE_MAX {
            return CellClass::Array(handle);
        }
    }
    if printable_prefix(arena.get(handle)) {
        return CellClass::Str(handle);
    }
    CellClass::Obj
}

/// True when every byte before the first NUL, among the first
/// `STR_SCAN_MAX` examined, is printable ASCII. An immediately-terminated
/// empty block passes.
fn printable_prefix(block: &[u8]) -> bool {
    for &b in block.iter().take(STR_SCAN_MAX) {
        if b == 0 {
            return true;
        }
        if b < 32 || b > 126 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_prefix_accepts_empty_and_ascii() {
        assert!(printable_prefix(&[0]));
        assert!(printable_prefix(b"hello\0"));
        assert!(printable_prefix(b"exactly printable with no nul at all"));
    }

    #[test]
    fn printable_prefix_rejects_control_and_high_bytes() {
        assert!(!printable_prefix(b"\x01rest\0"));
        assert!(!printable_prefix(b"ok\xffnot\0"));
    }

    #[test]
    fn bytes_past_the_scan_window_are_ignored() {
        let mut block = vec![b'a'; STR_SCAN_MAX];
        block.push(0xff);
        block.push(0);
        assert!(printable_prefix(&block));
    }
}
