//! Console input, parsed against a caller-supplied logical type name.

use crate::core::value::Cell;
use crate::errors::RuntimeError;

use super::core::Runtime;
use super::diag::Diagnostic;

impl Runtime {
    /// Read one line and convert it to a cell according to `expected_type`
    /// (`"string"`, `"int"`, `"float"`, or `"bool"`).
    pub fn read_input(&mut self, expected_type: &str) -> Result<Cell, RuntimeError> {
        let Some(mut line) = self.console.read_line() else {
            return self.fail(RuntimeError::ReadFailed);
        };
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        truncate_to(&mut line, self.config.input_line_max);

        match expected_type {
            "string" => {
                let value = self.new_string(&line)?;
                Ok(value.to_cell())
            }
            "int" => Ok(Cell(parse_i64_prefix(&line))),
            "float" => {
                // There is no float-tagged cell; the bit pattern rides in an
                // integer-shaped cell and downstream code is on its own.
                self.report(Diagnostic::float_bits_warning());
                let f = parse_f32_prefix(&line);
                Ok(Cell(i64::from(f.to_bits())))
            }
            "bool" => {
                let truthy =
                    line.eq_ignore_ascii_case("true") || parse_i64_prefix(&line) != 0;
                Ok(Cell(if truthy { 1 } else { 0 }))
            }
            other => self.fail(RuntimeError::UnknownInputType {
                requested: other.to_string(),
            }),
        }
    }
}

fn truncate_to(line: &mut String, max: usize) {
    if line.len() <= max {
        return;
    }
    let mut end = max;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line.truncate(end);
}

/// Signed decimal prefix parse with C `strtoll` semantics: leading
/// whitespace skipped, optional sign, parse stops at the first non-digit,
/// no digits yields 0, overflow saturates.
fn parse_i64_prefix(s: &str) -> i64 {
    let bytes = s.trim_start().as_bytes();
    let mut i = 0;
    let mut negative = false;
    if let Some(&sign) = bytes.first() {
        if sign == b'+' || sign == b'-' {
            negative = sign == b'-';
            i = 1;
        }
    }
    let mut value: i128 = 0;
    let mut any = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        any = true;
        value = value
            .saturating_mul(10)
            .saturating_add((bytes[i] - b'0') as i128);
        i += 1;
    }
    if !any {
        return 0;
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Longest-prefix float parse with C `strtof` semantics; malformed input
/// yields 0.
fn parse_f32_prefix(s: &str) -> f32 {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - i - 1;
        i = j;
    }
    if digits == 0 {
        return 0.0;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    t[..i].parse().unwrap_or(0.0)
}
