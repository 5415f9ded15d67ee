mod console;

pub use console::{Console, MemConsole, StdConsole};
