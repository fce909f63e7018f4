//! Mock filesystem implementations for testing.
//!
//! This module provides `MockFs` and pre-built scenarios for exercising the
//! collector without a real Linux `/proc`.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
