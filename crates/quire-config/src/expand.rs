//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` is the config path reported when a variable is unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(expand_env("style.css", "site.stylesheet").unwrap(), "style.css");
    }

    #[test]
    fn test_default_used_when_unset() {
        let value = expand_env("${QUIRE_TEST_SURELY_UNSET_VAR:-fallback.css}", "site.stylesheet");

        assert_eq!(value.unwrap(), "fallback.css");
    }

    #[test]
    fn test_unset_variable_is_error() {
        let err = expand_env("${QUIRE_TEST_SURELY_UNSET_VAR}", "site.title").unwrap_err();

        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "site.title");
                assert_eq!(message, "${QUIRE_TEST_SURELY_UNSET_VAR} not set");
            }
            other => panic!("expected EnvVar error, got {other:?}"),
        }
    }
}
