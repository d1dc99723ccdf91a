//! Configuration management utilities
//!
//! Environment lookups used by `from_env` constructors. Values are trimmed and
//! an empty value is treated the same as an unset variable.

/// Read an environment variable, trimmed; `None` when unset or blank
pub fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Interpret a boolean flag value
///
/// `0`, `false`, `no` and `off` (any case) are false; any other value is true.
pub fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
