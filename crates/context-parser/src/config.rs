// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Adapter configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! resource = "region"
//! strict = false
//! format = "json"
//! ```

use crate::{ConfigError, ParseMode};
use std::path::Path;

/// How extracted attributes are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON object.
    #[default]
    Json,
    /// One-line human-readable summary.
    Text,
}

impl OutputFormat {
    /// Parses a format name (`"json"` or `"text"`, case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "summary" => Ok(Self::Text),
            other => Err(ConfigError::Invalid(format!(
                "unknown output format '{other}'; expected 'json' or 'text'"
            ))),
        }
    }
}

/// Configuration for a context adapter run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AdapterConfig {
    /// Resource type whose parser handles the collector output.
    #[serde(default = "default_resource")]
    pub resource: String,
    /// Reject recognised keys that carry no value.
    #[serde(default)]
    pub strict: bool,
    /// Output format name: `"json"` or `"text"`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_resource() -> String {
    "region".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

impl AdapterConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Toml(format!("parse error: {e}")))?;
        config.output_format()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Toml(format!("serialise error: {e}")))
    }

    pub fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Permissive
        }
    }

    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        OutputFormat::parse(&self.format)
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            resource: default_resource(),
            strict: false,
            format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = AdapterConfig::default();
        assert_eq!(c.resource, "region");
        assert_eq!(c.parse_mode(), ParseMode::Permissive);
        assert_eq!(c.output_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
resource = "region"
strict = true
format = "text"
"#;
        let c = AdapterConfig::from_toml(toml).unwrap();
        assert_eq!(c.parse_mode(), ParseMode::Strict);
        assert_eq!(c.output_format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_from_toml_fills_defaults() {
        let c = AdapterConfig::from_toml("strict = true").unwrap();
        assert_eq!(c.resource, "region");
        assert_eq!(c.format, "json");
    }

    #[test]
    fn test_from_toml_rejects_bad_format() {
        let result = AdapterConfig::from_toml(r#"format = "xml""#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_toml_syntax_error() {
        let result = AdapterConfig::from_toml("resource = ");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = AdapterConfig {
            strict: true,
            ..Default::default()
        };
        let back = AdapterConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back.resource, c.resource);
        assert!(back.strict);
    }

    #[test]
    fn test_from_file_missing() {
        let result = AdapterConfig::from_file(Path::new("/nonexistent/ctx-adapter.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_from_file() {
        let dir = std::env::temp_dir().join("ctx_adapter_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("config_test_{}.toml", std::process::id()));
        std::fs::write(&path, "format = \"text\"\n").unwrap();
        let c = AdapterConfig::from_file(&path).unwrap();
        assert_eq!(c.output_format().unwrap(), OutputFormat::Text);
        let _ = std::fs::remove_file(&path);
    }
}
