//! Braced environment references in configuration strings.
//!
//! Only `${NAME}` and `${NAME:-fallback}` are recognized. A `$` that does not
//! open a brace (prices like `$5`, shell-style `$HOME`) is copied through
//! untouched, as is a `${` with no closing brace.

use std::borrow::Cow;
use std::env::VarError;

use crate::ConfigError;

/// Replace every `${...}` reference in `value` with its environment value.
///
/// `field` is the config key reported when a reference cannot be resolved.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find("${") {
        let Some(close) = rest[open..].find('}').map(|offset| open + offset) else {
            break;
        };
        expanded.push_str(&rest[..open]);
        expanded.push_str(&resolve(&rest[open..=close], field)?);
        rest = &rest[close + 1..];
    }

    expanded.push_str(rest);
    Ok(expanded)
}

/// Resolve one `${...}` reference.
///
/// The reference is handed to shellexpand on its own, so the text around it
/// never reaches the lookup.
fn resolve(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |name| std::env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|err: shellexpand::LookupError<VarError>| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("{}: {}", err.var_name, err.cause),
        })
}
