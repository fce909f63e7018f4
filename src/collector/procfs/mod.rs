//! Collectors for the Linux `/proc` filesystem.
//!
//! `parser` turns file contents into counters; `system` reads the files
//! through a [`FileSystem`](crate::collector::traits::FileSystem).

pub mod parser;
pub mod system;

pub use parser::{CounterSet, ParseError};
pub use system::{CollectError, SystemCollector};
