//! Environment variable lookup helpers.

use std::ffi::OsString;
use std::str::FromStr;

use super::Setting;

/// Get optional value (None if empty or missing). The value is kept as an
/// `OsString` so a non-UTF-8 value still counts as set.
pub fn lookup_opt<F>(lookup: &F, key: &str) -> Option<OsString>
where
    F: Fn(&str) -> Option<OsString>,
{
    lookup(key).filter(|s| !s.is_empty())
}

/// Parse an override, falling back to `default` when absent or unparsable.
pub fn lookup_parse<F, T>(lookup: &F, key: &str, default: T) -> Setting<T>
where
    F: Fn(&str) -> Option<OsString>,
    T: FromStr,
{
    match lookup(key).and_then(|v| v.to_str()?.parse().ok()) {
        Some(value) => Setting::custom(value),
        None => Setting::default_value(default),
    }
}
