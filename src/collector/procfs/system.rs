//! System collector for the memory files under `/proc/`.

use crate::collector::procfs::parser::{
    CounterSet, ParseError, parse_meminfo, parse_zoneinfo_low_watermarks,
};
use crate::collector::traits::FileSystem;
use crate::estimator::{self, Availability};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// A `/proc` file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A required counter is missing from the file contents.
    Parse(ParseError),
}

impl CollectError {
    /// Name of the missing meminfo field, if that is what went wrong.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            CollectError::Parse(ParseError::MissingField(name)) => Some(*name),
            CollectError::Io { .. } => None,
        }
    }
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            CollectError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io { source, .. } => Some(source),
            CollectError::Parse(e) => Some(e),
        }
    }
}

impl From<ParseError> for CollectError {
    fn from(e: ParseError) -> Self {
        CollectError::Parse(e)
    }
}

/// Reads `/proc/meminfo` and `/proc/zoneinfo` and turns them into an
/// availability estimate.
pub struct SystemCollector<F: FileSystem> {
    fs: F,
    proc_path: PathBuf,
}

impl<F: FileSystem> SystemCollector<F> {
    /// Creates a new system collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Base path this collector reads from.
    pub fn proc_path(&self) -> &Path {
        &self.proc_path
    }

    fn read(&self, name: &str) -> Result<String, CollectError> {
        let path = self.proc_path.join(name);
        match self.fs.read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "read proc file");
                Ok(content)
            }
            Err(source) => Err(CollectError::Io { path, source }),
        }
    }

    /// Returns the raw contents of `/proc/meminfo`.
    pub fn read_meminfo(&self) -> Result<String, CollectError> {
        self.read("meminfo")
    }

    /// Returns the raw contents of `/proc/zoneinfo`.
    pub fn read_zoneinfo(&self) -> Result<String, CollectError> {
        self.read("zoneinfo")
    }

    /// Collects the validated counters from `/proc/meminfo`.
    pub fn collect_counters(&self) -> Result<CounterSet, CollectError> {
        let content = self.read_meminfo()?;
        Ok(parse_meminfo(&content)?)
    }

    /// Collects the summed low watermarks from `/proc/zoneinfo`.
    pub fn collect_watermark(&self) -> Result<u64, CollectError> {
        let content = self.read_zoneinfo()?;
        Ok(parse_zoneinfo_low_watermarks(&content))
    }

    /// Reads both files, then estimates available memory.
    ///
    /// Nothing is parsed until both reads have succeeded.
    pub fn collect_availability(&self) -> Result<Availability, CollectError> {
        let meminfo = self.read_meminfo()?;
        let zoneinfo = self.read_zoneinfo()?;
        Ok(estimator::compute(&meminfo, &zoneinfo)?)
    }
}
