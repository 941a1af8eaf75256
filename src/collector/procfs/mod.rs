//! Accessors for Linux pseudo-files.
//!
//! `parser` holds the pure text parsers; `system` reads the files through
//! the `FileSystem` abstraction and applies them.

pub mod parser;
pub mod system;

pub use parser::{MountRecord, ParseError};
pub use system::ProcReader;
