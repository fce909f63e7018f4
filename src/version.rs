//! Build identification stamped in at compile time.
//!
//! Release builds set `GMEM_BUILD_COMMIT`, `GMEM_BUILD_DATE` and
//! `GMEM_BUILD_RUNTIME` in the environment of `cargo build`.

use serde::Serialize;

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub commit: &'static str,
    pub date: &'static str,
    pub runtime: &'static str,
}

impl BuildInfo {
    /// Build info of the running binary.
    pub fn current() -> Self {
        Self {
            commit: option_env!("GMEM_BUILD_COMMIT").unwrap_or(UNKNOWN),
            date: option_env!("GMEM_BUILD_DATE").unwrap_or(UNKNOWN),
            runtime: option_env!("GMEM_BUILD_RUNTIME").unwrap_or(UNKNOWN),
        }
    }

    pub fn banner(&self) -> String {
        format!(
            "Commit:  {}\nDate:    {}\nRuntime: {}\n",
            self.commit, self.date, self.runtime
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_layout() {
        let info = BuildInfo {
            commit: "3f2a9c1",
            date: "2026-10-19",
            runtime: "rustc 1.90.0",
        };
        assert_eq!(
            info.banner(),
            "Commit:  3f2a9c1\nDate:    2026-10-19\nRuntime: rustc 1.90.0\n"
        );
    }

    #[test]
    fn test_json_keys() {
        let info = BuildInfo {
            commit: "abc",
            date: UNKNOWN,
            runtime: UNKNOWN,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(
            json,
            r#"{"commit":"abc","date":"unknown","runtime":"unknown"}"#
        );
    }

    #[test]
    fn test_current_is_never_empty() {
        let info = BuildInfo::current();
        assert!(!info.commit.is_empty());
        assert!(!info.date.is_empty());
        assert!(!info.runtime.is_empty());
    }
}
