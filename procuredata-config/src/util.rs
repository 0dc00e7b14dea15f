use std::fmt::Display;
use std::str::FromStr;

use crate::loader::error::ConfigLoadError;

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn parse_bool_var(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|raw| parse_bool(&raw))
}

/// Read a non-blank environment variable.
pub fn string_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

/// Read and parse an environment variable.
///
/// Unset or blank is `Ok(None)`; a value that does not parse is reported
/// against the variable's name.
pub fn parse_var<T>(name: &'static str) -> Result<Option<T>, ConfigLoadError>
where
    T: FromStr,
    T::Err: Display,
{
    string_var(name)
        .map(|raw| parse_value(name, &raw))
        .transpose()
}

pub fn parse_value<T>(field: &'static str, raw: &str) -> Result<T, ConfigLoadError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|err: T::Err| ConfigLoadError::InvalidValue {
        field,
        reason: format!("'{raw}': {err}"),
    })
}
