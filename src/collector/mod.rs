//! Memory counter collector for Linux.
//!
//! Reads `/proc/meminfo` and `/proc/zoneinfo` through the [`FileSystem`]
//! trait, so the same code runs against the real `/proc` or an in-memory
//! mock.
//!
//! ```text
//!   SystemCollector ── /proc/meminfo ──► parse_meminfo ──────────────┐
//!         │                                                          ▼
//!         └──────── /proc/zoneinfo ──► parse_zoneinfo_low_watermarks ► estimate
//!                         │
//!                  ┌──────▼──────┐
//!                  │  FileSystem │ (trait)
//!                  └──────┬──────┘
//!                 ┌───────┴───────┐
//!          ┌──────▼──────┐ ┌──────▼──────┐
//!          │   RealFs    │ │   MockFs    │
//!          └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use gmem::collector::{MockFs, SystemCollector};
//!
//! let collector = SystemCollector::new(MockFs::typical_system(), "/proc");
//! let result = collector.collect_availability().unwrap();
//! assert_eq!(result.available + result.unavailable, result.total);
//! ```

pub mod mock;
pub mod procfs;
pub mod traits;

pub use mock::MockFs;
pub use procfs::{CollectError, CounterSet, ParseError, SystemCollector};
pub use traits::{FileSystem, RealFs};
