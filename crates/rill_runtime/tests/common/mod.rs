#![allow(dead_code)]

use rill_runtime::{MemConsole, Runtime, RuntimeConfig, Value};

pub fn runtime() -> (Runtime, MemConsole) {
    runtime_with_input(&[])
}

pub fn runtime_with_input(lines: &[&str]) -> (Runtime, MemConsole) {
    runtime_with(lines, RuntimeConfig::default())
}

pub fn runtime_with(lines: &[&str], config: RuntimeConfig) -> (Runtime, MemConsole) {
    let console = MemConsole::new();
    for line in lines {
        console.push_line(line);
    }
    let rt = Runtime::with_console(Box::new(console.clone()), config);
    (rt, console)
}

/// The byte content of a string value, decoded lossily.
pub fn str_of(rt: &Runtime, value: Value) -> String {
    let handle = value.handle().expect("expected a heap-backed value");
    let block = rt.arena().get(handle);
    String::from_utf8_lossy(rill_runtime::core::text::str_bytes(block)).into_owned()
}
