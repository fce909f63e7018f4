//! Parsers for `/proc/meminfo` and `/proc/zoneinfo`.
//!
//! These are pure functions over the file contents, so they are easy to
//! test with string inputs.

use std::collections::HashMap;
use tracing::trace;

/// `/proc/meminfo` counters the availability estimate cannot do without,
/// in the order they are validated.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "MemFree",
    "MemTotal",
    "Active(file)",
    "Inactive(file)",
    "SReclaimable",
];

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required counter has no `<name>: <value> kB` line.
    MissingField(&'static str),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingField(name) => write!(f, "missing field {} in meminfo", name),
        }
    }
}

impl std::error::Error for ParseError {}

/// Kilobyte counters parsed from `/proc/meminfo`.
///
/// Can only be built when every entry of [`REQUIRED_FIELDS`] is present, so
/// the typed accessors never have to guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSet {
    mem_total: u64,
    mem_free: u64,
    active_file: u64,
    inactive_file: u64,
    s_reclaimable: u64,
    counters: HashMap<String, u64>,
}

impl CounterSet {
    /// Validates a raw name → kB mapping.
    ///
    /// Fails with the first absent name of [`REQUIRED_FIELDS`].
    pub fn from_counters(counters: HashMap<String, u64>) -> Result<Self, ParseError> {
        let mut required = [0u64; REQUIRED_FIELDS.len()];
        for (slot, name) in required.iter_mut().zip(REQUIRED_FIELDS) {
            *slot = *counters.get(name).ok_or(ParseError::MissingField(name))?;
        }
        let [mem_free, mem_total, active_file, inactive_file, s_reclaimable] = required;

        Ok(Self {
            mem_total,
            mem_free,
            active_file,
            inactive_file,
            s_reclaimable,
            counters,
        })
    }

    pub fn mem_total(&self) -> u64 {
        self.mem_total
    }

    pub fn mem_free(&self) -> u64 {
        self.mem_free
    }

    pub fn active_file(&self) -> u64 {
        self.active_file
    }

    pub fn inactive_file(&self) -> u64 {
        self.inactive_file
    }

    pub fn s_reclaimable(&self) -> u64 {
        self.s_reclaimable
    }

    /// Looks up any parsed counter by its meminfo name, e.g. `"Cached"`.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.counters.get(name).copied()
    }

    /// Number of distinct counters parsed.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

/// Parses `/proc/meminfo` content.
///
/// Format: `<name>:<whitespace><digits>[<whitespace>]kB`, one counter per
/// line. The name may hold any character except colon and whitespace, so
/// `Active(file)` is a single name. Lines without the `kB` suffix
/// (`HugePages_Total:` and friends) are skipped. A repeated name keeps the
/// value of its last line.
pub fn parse_meminfo(content: &str) -> Result<CounterSet, ParseError> {
    let mut counters = HashMap::new();

    for line in content.lines() {
        if let Some((name, value)) = parse_kb_line(line) {
            counters.insert(name.to_string(), value);
        }
    }

    CounterSet::from_counters(counters)
}

/// Splits one meminfo line into name and kB value.
fn parse_kb_line(line: &str) -> Option<(&str, u64)> {
    let (head, rest) = line.split_once(':')?;

    // The name must touch the colon.
    if head.ends_with(char::is_whitespace) {
        return None;
    }
    let name = head.split_whitespace().next_back()?;

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let (digits, tail) = rest.split_at(digits_end);
    if !tail.trim_start().starts_with("kB") {
        return None;
    }

    Some((name, parse_digits_lenient(name, digits)))
}

/// Parses a run of ASCII digits, falling back to zero when it overflows.
fn parse_digits_lenient(name: &str, digits: &str) -> u64 {
    digits.parse().unwrap_or_else(|_| {
        trace!(counter = name, digits, "unparseable counter value, using 0");
        0
    })
}

/// Sums every `low <pages>` watermark in `/proc/zoneinfo` content.
///
/// The token appears once per zone, per NUMA node. Values are summed as
/// reported. Content without any such token sums to 0.
pub fn parse_zoneinfo_low_watermarks(content: &str) -> u64 {
    let mut tokens = content.split_whitespace().peekable();
    let mut total: u64 = 0;

    while let Some(token) = tokens.next() {
        if token == "low"
            && let Some(value) = tokens.peek()
            && !value.is_empty()
            && value.bytes().all(|b| b.is_ascii_digit())
        {
            total = total.saturating_add(parse_digits_lenient("low", value));
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMINFO: &str = "\
MemTotal:        4000 kB
MemFree:         1000 kB
MemAvailable:    1500 kB
Active(file):     400 kB
Inactive(file):   200 kB
SReclaimable:     300 kB
HugePages_Total:    0
Hugepagesize:    2048 kB
";

    #[test]
    fn test_parse_meminfo() {
        let info = parse_meminfo(MEMINFO).unwrap();

        assert_eq!(info.mem_total(), 4000);
        assert_eq!(info.mem_free(), 1000);
        assert_eq!(info.active_file(), 400);
        assert_eq!(info.inactive_file(), 200);
        assert_eq!(info.s_reclaimable(), 300);
        assert_eq!(info.get("MemAvailable"), Some(1500));
        assert_eq!(info.get("Hugepagesize"), Some(2048));
        assert_eq!(info.get("HugePages_Total"), None);
        assert_eq!(info.len(), 7);
    }

    #[test]
    fn test_parse_meminfo_last_duplicate_wins() {
        let content = format!("MemFree: 100 kB\n{MEMINFO}MemFree: 200 kB\n");
        let info = parse_meminfo(&content).unwrap();
        assert_eq!(info.mem_free(), 200);
    }

    #[test]
    fn test_parse_meminfo_missing_sreclaimable() {
        let content: String = MEMINFO
            .lines()
            .filter(|l| !l.starts_with("SReclaimable"))
            .map(|l| format!("{l}\n"))
            .collect();
        assert_eq!(
            parse_meminfo(&content),
            Err(ParseError::MissingField("SReclaimable"))
        );
    }

    #[test]
    fn test_parse_meminfo_reports_first_missing_field() {
        let err = parse_meminfo("Active(file): 1 kB\n").unwrap_err();
        assert_eq!(err, ParseError::MissingField("MemFree"));
        assert_eq!(err.to_string(), "missing field MemFree in meminfo");

        let err = parse_meminfo("MemFree: 1 kB\nMemTotal: 2 kB\n").unwrap_err();
        assert_eq!(err, ParseError::MissingField("Active(file)"));
    }

    #[test]
    fn test_parse_meminfo_present_zero_is_not_missing() {
        let content = "\
MemTotal: 0 kB
MemFree: 0 kB
Active(file): 0 kB
Inactive(file): 0 kB
SReclaimable: 0 kB
";
        let info = parse_meminfo(content).unwrap();
        assert_eq!(info.s_reclaimable(), 0);
        assert_eq!(info.mem_total(), 0);
    }

    #[test]
    fn test_parse_meminfo_overflowing_value_is_zero() {
        let content = format!("{MEMINFO}Cached: 99999999999999999999999 kB\n");
        let info = parse_meminfo(&content).unwrap();
        assert_eq!(info.get("Cached"), Some(0));
    }

    #[test]
    fn test_parse_kb_line_shapes() {
        assert_eq!(parse_kb_line("MemFree:  42 kB"), Some(("MemFree", 42)));
        assert_eq!(parse_kb_line("MemFree:\t42kB"), Some(("MemFree", 42)));
        assert_eq!(parse_kb_line("Active(file): 7 kB"), Some(("Active(file)", 7)));
        assert_eq!(parse_kb_line("  Shmem: 3 kB"), Some(("Shmem", 3)));
        assert_eq!(parse_kb_line("MemFree: 42"), None);
        assert_eq!(parse_kb_line("MemFree: 42 MB"), None);
        assert_eq!(parse_kb_line("MemFree:42 kB"), None);
        assert_eq!(parse_kb_line("MemFree : 42 kB"), None);
        assert_eq!(parse_kb_line("MemFree: x kB"), None);
        assert_eq!(parse_kb_line(""), None);
    }

    #[test]
    fn test_parse_zoneinfo_sums_low_watermarks() {
        let content = "\
Node 0, zone      DMA
  pages free     3840
        min      80
        low      100
        high     120
        spanned  4095
Node 0, zone   Normal
  pages free     1532160
        min      200
        low      250
        high     300
  pagesets
    cpu: 0
              high:  378
";
        assert_eq!(parse_zoneinfo_low_watermarks(content), 350);
    }

    #[test]
    fn test_parse_zoneinfo_without_watermarks() {
        assert_eq!(parse_zoneinfo_low_watermarks(""), 0);
        assert_eq!(parse_zoneinfo_low_watermarks("Node 0, zone DMA\n  min 5\n"), 0);
    }

    #[test]
    fn test_parse_zoneinfo_ignores_non_numeric_low() {
        let content = "low water\nlow 5\nbelow 7\nlow\n";
        assert_eq!(parse_zoneinfo_low_watermarks(content), 5);
    }

    #[test]
    fn test_parse_zoneinfo_value_on_next_line() {
        assert_eq!(parse_zoneinfo_low_watermarks("low\n  12"), 12);
    }
}
