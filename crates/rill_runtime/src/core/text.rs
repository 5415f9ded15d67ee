//! Byte-string block helpers.

/// The string content of a block: everything before the first NUL, or the
/// whole block when no terminator is present (opaque blocks).
pub fn str_bytes(block: &[u8]) -> &[u8] {
    match block.iter().position(|&b| b == 0) {
        Some(n) => &block[..n],
        None => block,
    }
}

/// Append the decimal representation of `v`.
pub fn push_i64(out: &mut String, v: i64) {
    let mut buf = itoa::Buffer::new();
    out.push_str(buf.format(v));
}
