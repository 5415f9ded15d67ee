//! Console capability trait for dependency injection.
//!
//! The runtime never touches stdin/stdout/stderr directly; everything goes
//! through a [`Console`], so tests can swap in [`MemConsole`] and inspect
//! both streams.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;

pub trait Console {
    /// Read one line including its terminator. `None` at end of input or
    /// on a read failure.
    fn read_line(&mut self) -> Option<String>;
    fn write_out(&mut self, s: &str);
    fn write_err(&mut self, s: &str);
    fn flush_out(&mut self);
}

/// Process-standard streams.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn write_out(&mut self, s: &str) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(s.as_bytes());
    }

    fn write_err(&mut self, s: &str) {
        let mut err = std::io::stderr().lock();
        let _ = err.write_all(s.as_bytes());
        let _ = err.flush();
    }

    fn flush_out(&mut self) {
        let _ = std::io::stdout().lock().flush();
    }
}

/// In-memory console. Cloning shares the buffers, so a test can keep one
/// clone to feed input and inspect output while the runtime owns the other.
#[derive(Clone, Default)]
pub struct MemConsole {
    inner: Rc<RefCell<MemConsoleInner>>,
}

#[derive(Default)]
struct MemConsoleInner {
    input: VecDeque<String>,
    out: String,
    err: String,
}

impl MemConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one line of input (a terminator is appended).
    pub fn push_line(&self, line: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.input.push_back(format!("{line}\n"));
    }

    pub fn out(&self) -> String {
        self.inner.borrow().out.clone()
    }

    pub fn err(&self) -> String {
        self.inner.borrow().err.clone()
    }

    pub fn clear_out(&self) {
        self.inner.borrow_mut().out.clear();
    }
}

impl Console for MemConsole {
    fn read_line(&mut self) -> Option<String> {
        self.inner.borrow_mut().input.pop_front()
    }

    fn write_out(&mut self, s: &str) {
        self.inner.borrow_mut().out.push_str(s);
    }

    fn write_err(&mut self, s: &str) {
        self.inner.borrow_mut().err.push_str(s);
    }

    fn flush_out(&mut self) {}
}
