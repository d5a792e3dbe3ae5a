//! Deployment toggle for the sidecar handshake.

/// Environment variable that switches the real sidecar client on.
pub const ENABLED_ENV_VAR: &str = "ISTIO_PROXY_ENABLED";

/// Parses a boolean flag.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`,
/// `false`, `False`. Everything else is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Resolves the toggle from an optional raw value. Absent or unparsable
/// values disable the integration.
pub fn enabled_from_value(value: Option<&str>) -> bool {
    value.and_then(parse_bool).unwrap_or(false)
}

/// Reads [`ENABLED_ENV_VAR`] from the process environment.
pub fn enabled_from_env() -> bool {
    let value = std::env::var(ENABLED_ENV_VAR).ok();
    enabled_from_value(value.as_deref())
}
