use tracing::debug;

/// Resolve a credential value. A leading '$' marks an environment variable
/// reference; anything else is taken literally. An unset variable leaves the
/// reference in place so callers can tell it never resolved.
pub fn resolve_credential(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            Err(_) => {
                debug!(var = %var_name, "Environment variable not set");
                value.to_string()
            }
        }
    } else {
        value.to_string()
    }
}

/// True when a configured credential is usable: non-empty and not a dangling
/// `$VAR` reference.
pub fn is_resolved(value: &str) -> bool {
    !value.is_empty() && !value.starts_with('$')
}
