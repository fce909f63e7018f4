//! gmem - available memory estimate for Linux.
//!
//! Reads `/proc/meminfo` and `/proc/zoneinfo` and applies the kernel's
//! reclaim-headroom heuristic to tell how much memory can be allocated
//! without swapping.
//!
//! - `collector` — `/proc` access, parsers, mock filesystem
//! - `estimator` — the pure estimate over parsed counters
//! - `fmt` — display units
//! - `report` — text and JSON rendering
//! - `version` — build banner

pub mod collector;
pub mod estimator;
pub mod fmt;
pub mod report;
pub mod version;

pub use estimator::{Availability, compute, estimate};
