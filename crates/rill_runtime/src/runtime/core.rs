//! Runtime state shared by all primitives.

use crate::core::arena::Arena;
use crate::errors::RuntimeError;
use crate::util::{Console, StdConsole};

use super::config::RuntimeConfig;
use super::diag::Diagnostic;

pub struct Runtime {
    pub(crate) arena: Arena,
    pub(crate) console: Box<dyn Console>,
    pub(crate) diags: Vec<Diagnostic>,
    pub(crate) config: RuntimeConfig,
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self::with_console(Box::new(StdConsole), config)
    }

    pub fn with_console(console: Box<dyn Console>, config: RuntimeConfig) -> Self {
        Self {
            arena: Arena::new(config.arena_byte_cap),
            console,
            diags: Vec::new(),
            config,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn config(&self) -> RuntimeConfig {
        self.config
    }

    /// Diagnostic events recorded so far, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diags
    }

    pub fn clear_diagnostics(&mut self) {
        self.diags.clear();
    }

    pub(crate) fn report(&mut self, diag: Diagnostic) {
        self.console.write_err(&format!("{}\n", diag.message));
        self.diags.push(diag);
    }

    /// Record the diagnostic for a failure and hand the error back.
    pub(crate) fn fail<T>(&mut self, err: RuntimeError) -> Result<T, RuntimeError> {
        self.report(Diagnostic::from_error(&err));
        Err(err)
    }

    /// One line on the output stream, flushed immediately so interleaving
    /// with other writers of the same stream stays deterministic.
    pub(crate) fn write_line(&mut self, s: &str) {
        self.console.write_out(s);
        self.console.write_out("\n");
        self.console.flush_out();
    }
}
