//! Display units for kilobyte figures.
//!
//! Conversion is integer division, truncating toward zero: 1023 kB is 0 MB.

use clap::ValueEnum;

/// Unit a kilobyte figure is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Unit {
    /// Kilobytes, as reported by the kernel.
    #[default]
    #[value(name = "k", alias = "kilobytes")]
    Kilobytes,
    /// Kilobytes / 1024.
    #[value(name = "m", alias = "megabytes")]
    Megabytes,
    /// Kilobytes / 1048576.
    #[value(name = "g", alias = "gigabytes")]
    Gigabytes,
}

impl Unit {
    /// Number of kilobytes in one of this unit.
    pub fn divisor(self) -> i64 {
        match self {
            Unit::Kilobytes => 1,
            Unit::Megabytes => 1024,
            Unit::Gigabytes => 1024 * 1024,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Kilobytes => "kB",
            Unit::Megabytes => "MB",
            Unit::Gigabytes => "GB",
        }
    }

    /// Converts a kilobyte figure into this unit.
    pub fn convert(self, kb: i64) -> i64 {
        kb / self.divisor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_truncates() {
        assert_eq!(Unit::Megabytes.convert(1023), 0);
        assert_eq!(Unit::Megabytes.convert(1024), 1);
        assert_eq!(Unit::Megabytes.convert(2047), 1);
        assert_eq!(Unit::Gigabytes.convert(1048575), 0);
        assert_eq!(Unit::Gigabytes.convert(16384000), 15);
        assert_eq!(Unit::Kilobytes.convert(1023), 1023);
    }

    #[test]
    fn test_suffix() {
        assert_eq!(Unit::Kilobytes.suffix(), "kB");
        assert_eq!(Unit::Megabytes.suffix(), "MB");
        assert_eq!(Unit::Gigabytes.suffix(), "GB");
    }

    #[test]
    fn test_parse_from_flag_value() {
        assert_eq!(Unit::from_str("k", false), Ok(Unit::Kilobytes));
        assert_eq!(Unit::from_str("m", false), Ok(Unit::Megabytes));
        assert_eq!(Unit::from_str("gigabytes", false), Ok(Unit::Gigabytes));
        assert!(Unit::from_str("t", false).is_err());
    }
}
