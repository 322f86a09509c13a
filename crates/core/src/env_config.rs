//! Environment variable parsing for numeric and other `FromStr` settings.

/// Parse an environment variable, falling back to `default`.
///
/// An unset or empty variable yields `default` silently. A value that does not
/// parse is logged at warn level before falling back.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) if v.trim().is_empty() => default,
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}
