use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::UrlError;

/// Characters the pattern grammar and URL path already give meaning to.
/// `.` splits `plugin.name`; a leading `-` is stripped from parameter lists.
const RESERVED_CHARS: [char; 6] = ['(', ')', ':', '/', '.', '-'];

/// Separators used by the pattern codec.
///
/// The codec never falls back to defaults on its own; every build/parse call
/// takes a config. `Default` gives the separators the Pixelbin CDN uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Joins operations in a pattern (`t.resize(w:1)~t.flip()`).
    pub operation_separator: String,
    /// Joins parameters inside one operation (`w:1,h:2`).
    pub parameter_separator: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            operation_separator: "~".to_string(),
            parameter_separator: ",".to_string(),
        }
    }
}

impl UrlConfig {
    pub fn new(
        operation_separator: impl Into<String>,
        parameter_separator: impl Into<String>,
    ) -> Self {
        Self {
            operation_separator: operation_separator.into(),
            parameter_separator: parameter_separator.into(),
        }
    }

    /// Rejects separators that would make patterns ambiguous.
    pub fn validate(&self) -> Result<(), UrlError> {
        for (label, sep) in [
            ("operation_separator", &self.operation_separator),
            ("parameter_separator", &self.parameter_separator),
        ] {
            if sep.is_empty() {
                return Err(UrlError::illegal(format!("{label} must not be empty")));
            }
            if sep.contains(RESERVED_CHARS) {
                return Err(UrlError::illegal(format!(
                    "{label} {sep:?} contains a reserved character"
                )));
            }
        }
        if self.operation_separator.contains(self.parameter_separator.as_str())
            || self.parameter_separator.contains(self.operation_separator.as_str())
        {
            return Err(UrlError::illegal(
                "operation_separator and parameter_separator must not contain one another",
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML config document.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: UrlConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Load separators from a TOML file.
pub fn load_from_path(path: &Path) -> Result<UrlConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading url config {}", path.display()))?;
    let cfg = UrlConfig::from_toml_str(&data)
        .with_context(|| format!("parsing url config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded url config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = UrlConfig::default();
        assert_eq!(cfg.operation_separator, "~");
        assert_eq!(cfg.parameter_separator, ",");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlConfig::new("~", "|");
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed = UrlConfig::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            operation_separator = "~~"
            parameter_separator = ";"
        "#;
        let cfg = UrlConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.operation_separator, "~~");
        assert_eq!(cfg.parameter_separator, ";");
    }

    #[test]
    fn config_rejects_bad_separators() {
        assert!(UrlConfig::new("", ",").validate().is_err());
        assert!(UrlConfig::new("~", "~").validate().is_err());
        assert!(UrlConfig::new("/", ",").validate().is_err());
        assert!(UrlConfig::new("~", ":").validate().is_err());
        let err = UrlConfig::from_toml_str(
            r#"
            operation_separator = ")"
            parameter_separator = ","
        "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn config_rejects_nested_separators() {
        let err = UrlConfig::new("~", "~~").validate().unwrap_err();
        assert!(err.to_string().contains("must not contain one another"));
        assert!(UrlConfig::new("~~", "~").validate().is_err());
        assert!(UrlConfig::new("~|", "|").validate().is_err());
        assert!(UrlConfig::new("~~", "__").validate().is_ok());
    }

    #[test]
    fn config_rejects_dot_and_dash() {
        for cfg in [
            UrlConfig::new(".", ","),
            UrlConfig::new("~", "."),
            UrlConfig::new("-", ","),
            UrlConfig::new("~", "--"),
        ] {
            let err = cfg.validate().unwrap_err();
            assert!(
                err.to_string().contains("reserved character"),
                "{cfg:?} should be rejected"
            );
        }
    }

    #[test]
    fn config_toml_missing_field_is_error() {
        assert!(UrlConfig::from_toml_str(r#"operation_separator = "~""#).is_err());
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"operation_separator = \"~\"\nparameter_separator = \",\"\n")
            .unwrap();
        f.flush().unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg, UrlConfig::default());
    }

    #[test]
    fn load_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("reading url config"));
    }
}
