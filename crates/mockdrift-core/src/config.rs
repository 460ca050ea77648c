//! Reconciler settings.
//!
//! Settings come from an optional file (any format the `config` crate
//! recognizes by extension) layered under `MOCKDRIFT_*` environment
//! variables. Command-line flags are applied on top by the caller.

use crate::diff::filter::ExceptionFilter;
use crate::errors::{DriftError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MOCKDRIFT";

/// JSON indentation used when writing fixtures back
pub const DEFAULT_INDENT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Extra field names to ignore when comparing
    pub ignore_fields: Vec<String>,
    /// Use `ignore_fields` instead of the built-in list rather than in addition to it
    pub replace_default_ignores: bool,
    pub indent: usize,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            ignore_fields: Vec::new(),
            replace_default_ignores: false,
            indent: DEFAULT_INDENT,
        }
    }
}

impl DriftConfig {
    /// Load settings from `path` (if given) and the process environment.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the file is missing or unreadable, or a value has
    /// the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, None)
    }

    fn load_from(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("ignore_fields")
            .source(env);

        let settings: DriftConfig = builder
            .add_source(environment)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| DriftError::InvalidConfig {
                reason: e.to_string(),
            })?;

        if settings.indent > 16 {
            return Err(DriftError::InvalidConfig {
                reason: format!("indent must be at most 16, got {}", settings.indent),
            });
        }
        tracing::debug!(
            ignore_fields = ?settings.ignore_fields,
            replace_default_ignores = settings.replace_default_ignores,
            indent = settings.indent,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Filter combining the configured fields with `extra` from the command line
    pub fn exception_filter(&self, extra: &[String]) -> ExceptionFilter {
        let base = if self.replace_default_ignores {
            ExceptionFilter::empty()
        } else {
            ExceptionFilter::default()
        };
        base.with_fields(self.ignore_fields.iter().cloned())
            .with_fields(extra.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::filter::DEFAULT_IGNORED_FIELDS;
    use std::io::Write;

    fn no_env() -> Option<HashMap<String, String>> {
        Some(HashMap::new())
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = DriftConfig::load_from(None, no_env()).unwrap();
        assert_eq!(settings, DriftConfig::default());
        assert_eq!(settings.indent, 4);
    }

    #[test]
    fn test_file_values_are_read() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "ignore_fields = [\"x-request-id\"]\nindent = 2").unwrap();

        let settings = DriftConfig::load_from(Some(file.path()), no_env()).unwrap();
        assert_eq!(settings.ignore_fields, vec!["x-request-id"]);
        assert_eq!(settings.indent, 2);
        assert!(!settings.replace_default_ignores);
    }

    #[test]
    fn test_missing_file_is_invalid_config() {
        let err = DriftConfig::load_from(Some(Path::new("/nonexistent/mockdrift.toml")), no_env())
            .unwrap_err();
        assert!(matches!(err, DriftError::InvalidConfig { .. }));
    }

    #[test]
    fn test_environment_list_is_split() {
        let env = HashMap::from([(
            "MOCKDRIFT_IGNORE_FIELDS".to_string(),
            "x-trace,requestId".to_string(),
        )]);
        let settings = DriftConfig::load_from(None, Some(env)).unwrap();
        assert_eq!(settings.ignore_fields, vec!["x-trace", "requestId"]);
    }

    #[test]
    fn test_oversized_indent_is_rejected() {
        let env = HashMap::from([("MOCKDRIFT_INDENT".to_string(), "40".to_string())]);
        let err = DriftConfig::load_from(None, Some(env)).unwrap_err();
        assert!(err.to_string().contains("indent"));
    }

    #[test]
    fn test_exception_filter_layers() {
        let settings = DriftConfig {
            ignore_fields: vec!["x-trace".to_string()],
            ..DriftConfig::default()
        };
        let filter = settings.exception_filter(&["requestId".to_string()]);
        assert_eq!(filter.fields().len(), DEFAULT_IGNORED_FIELDS.len() + 2);

        let replaced = DriftConfig {
            replace_default_ignores: true,
            ..settings
        };
        assert_eq!(
            replaced.exception_filter(&[]).fields(),
            &["x-trace".to_string()]
        );
    }
}
