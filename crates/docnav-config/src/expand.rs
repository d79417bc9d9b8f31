//! Environment variable and home directory expansion for config strings.

use crate::ConfigError;

/// Expand `$VAR` and `${VAR}` references.
///
/// # Errors
///
/// Returns `ConfigError::EnvVar` naming `field` if a referenced variable is
/// unset or not valid unicode.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| env_error(&e, field))
}

/// Expand a leading `~` plus `$VAR` and `${VAR}` references.
///
/// # Errors
///
/// Returns `ConfigError::EnvVar` naming `field` if a referenced variable is
/// unset or not valid unicode.
pub(crate) fn expand_path(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::full(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| env_error(&e, field))
}

fn env_error(err: &shellexpand::LookupError<std::env::VarError>, field: &str) -> ConfigError {
    ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} {}", err.var_name, var_error_reason(&err.cause)),
    }
}

fn var_error_reason(err: &std::env::VarError) -> &'static str {
    match err {
        std::env::VarError::NotPresent => "not set",
        std::env::VarError::NotUnicode(_) => "is not valid unicode",
    }
}
