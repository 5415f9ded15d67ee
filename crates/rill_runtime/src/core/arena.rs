//! Arena ownership of heap blocks.
//!
//! Every array, string, and opaque object lives in one [`Arena`] owned by
//! the runtime for the whole process lifetime; allocation hands back a
//! [`Handle`] and nothing is freed until the runtime is dropped. Blocks are
//! untyped byte buffers on purpose: the heuristic printer probes their
//! leading bytes the same way the untagged design probed raw memory.

use crate::core::value::Cell;
use crate::errors::RuntimeError;

/// Width of one cell inside a block, in bytes.
pub const CELL_BYTES: usize = 8;

/// Base of the handle encoding inside a cell. Chosen far outside the
/// literal-integer range so the two never collide.
pub const CELL_HANDLE_BASE: i64 = 0x1000_0000;

/// Handle to an arena-owned block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub usize);

impl Handle {
    /// The cell encoding generated code passes around.
    #[inline]
    pub fn to_cell(self) -> Cell {
        Cell(CELL_HANDLE_BASE + self.0 as i64)
    }
}

pub struct Arena {
    blocks: Vec<Box<[u8]>>,
    bytes: usize,
    byte_cap: usize,
}

impl Arena {
    pub fn new(byte_cap: usize) -> Self {
        Self {
            blocks: Vec::with_capacity(64),
            bytes: 0,
            byte_cap,
        }
    }

    /// Decode a cell back to a handle. Returns `None` for the null cell,
    /// for anything outside the handle encoding, and for indices with no
    /// live block behind them.
    pub fn resolve(&self, cell: Cell) -> Option<Handle> {
        let raw = cell.0.checked_sub(CELL_HANDLE_BASE)?;
        if raw < 0 {
            return None;
        }
        let idx = raw as usize;
        if idx < self.blocks.len() {
            Some(Handle(idx))
        } else {
            None
        }
    }

    pub fn get(&self, handle: Handle) -> &[u8] {
        &self.blocks[handle.0]
    }

    pub fn get_mut(&mut self, handle: Handle) -> &mut [u8] {
        &mut self.blocks[handle.0]
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn bytes_allocated(&self) -> usize {
        self.bytes
    }

    fn push_block(
        &mut self,
        block: Vec<u8>,
        context: &'static str,
    ) -> Result<Handle, RuntimeError> {
        let requested = block.len();
        if self.bytes.saturating_add(requested) > self.byte_cap {
            return Err(RuntimeError::AllocFailed { context, requested });
        }
        self.bytes += requested;
        let id = self.blocks.len();
        self.blocks.push(block.into_boxed_slice());
        Ok(Handle(id))
    }

    /// Allocate a zero-initialized array block: one length header cell
    /// followed by `size` element cells, all little-endian.
    pub fn alloc_array(&mut self, size: i64) -> Result<Handle, RuntimeError> {
        if size < 0 {
            return Err(RuntimeError::NegativeSize { size });
        }
        let cells = size as usize;
        let total = match cells.checked_add(1).and_then(|n| n.checked_mul(CELL_BYTES)) {
            Some(t) => t,
            None => {
                return Err(RuntimeError::AllocFailed {
                    context: "array_new",
                    requested: usize::MAX,
                });
            }
        };
        if self.bytes.saturating_add(total) > self.byte_cap {
            return Err(RuntimeError::AllocFailed {
                context: "array_new",
                requested: total,
            });
        }
        let mut block = vec![0u8; total];
        block[..CELL_BYTES].copy_from_slice(&size.to_le_bytes());
        self.push_block(block, "array_new")
    }

    /// Allocate a fresh NUL-terminated string block.
    pub fn alloc_str(&mut self, s: &[u8], context: &'static str) -> Result<Handle, RuntimeError> {
        let mut block = Vec::with_capacity(s.len() + 1);
        block.extend_from_slice(s);
        block.push(0);
        self.push_block(block, context)
    }

    /// Allocate an opaque block the printer has no interpretation for.
    pub fn alloc_opaque(&mut self, bytes: &[u8]) -> Result<Handle, RuntimeError> {
        self.push_block(bytes.to_vec(), "alloc_opaque")
    }

    /// Read a block's leading cell as an array length candidate. `None` when
    /// the block is too short to hold a full header.
    pub fn header(&self, handle: Handle) -> Option<i64> {
        let block = self.get(handle);
        let head = block.get(..CELL_BYTES)?;
        let mut raw = [0u8; CELL_BYTES];
        raw.copy_from_slice(head);
        Some(i64::from_le_bytes(raw))
    }

    /// Read the element cell at `slot`, or 0 when the slot lies beyond the
    /// block's real extent (the untagged design read adjacent garbage
    /// there; the branch selection is preserved, the contents are defined).
    pub fn probe_cell(&self, handle: Handle, slot: i64) -> i64 {
        let Some(offset) = cell_offset(slot) else {
            return 0;
        };
        let block = self.get(handle);
        match block.get(offset..offset + CELL_BYTES) {
            Some(raw) => {
                let mut buf = [0u8; CELL_BYTES];
                buf.copy_from_slice(raw);
                i64::from_le_bytes(buf)
            }
            None => 0,
        }
    }

    /// Overwrite the element cell at `slot` in place. A slot beyond the
    /// block's real extent is left untouched.
    pub fn write_cell(&mut self, handle: Handle, slot: i64, value: i64) {
        let Some(offset) = cell_offset(slot) else {
            return;
        };
        let block = self.get_mut(handle);
        if let Some(raw) = block.get_mut(offset..offset + CELL_BYTES) {
            raw.copy_from_slice(&value.to_le_bytes());
        }
    }
}

fn cell_offset(slot: i64) -> Option<usize> {
    let slot = usize::try_from(slot).ok()?;
    slot.checked_add(1)?.checked_mul(CELL_BYTES)
}
