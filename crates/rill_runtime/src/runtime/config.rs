//! Runtime configuration.

/// Runtime configuration options.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeConfig {
    /// Upper bound on one line of console input, in bytes. Longer lines are
    /// truncated at a character boundary.
    pub input_line_max: usize,
    /// Total arena budget; exceeding it is the allocation-failure path.
    pub arena_byte_cap: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            input_line_max: 256,
            arena_byte_cap: 64 * 1024 * 1024,
        }
    }
}
