//! Codegen configuration read from `shapegen.toml`.
//!
//! Every key is optional; a missing file section yields the defaults.

use serde::Deserialize;
use shapegen_model::types::Protocol;
use std::{fs, path::Path};
use thiserror::Error as ThisError;

/// Runtime path emitted code uses when none is configured.
pub const DEFAULT_RUNTIME_PATH: &str = "::shapegen::runtime";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid runtime_path '{0}'")]
    RuntimePath(String),
}

///
/// Config
/// the whole `shapegen.toml` document
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub codegen: CodegenConfig,
}

///
/// CodegenConfig
///

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    pub runtime_path: String,
    pub pretty: bool,
    pub parallel: bool,
    pub records: bool,
    pub services: bool,
    pub default_protocol: Protocol,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            pretty: true,
            parallel: true,
            records: true,
            services: true,
            default_protocol: Protocol::default(),
        }
    }
}

impl CodegenConfig {
    // a leading `::` is allowed, every other segment must be an identifier
    fn validate(&self) -> Result<(), ConfigError> {
        let path = self.runtime_path.strip_prefix("::").unwrap_or(&self.runtime_path);
        let valid = !path.is_empty()
            && path.split("::").all(|seg| {
                let mut chars = seg.chars();
                chars
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            });

        if valid {
            Ok(())
        } else {
            Err(ConfigError::RuntimePath(self.runtime_path.clone()))
        }
    }
}

/// Parse a config document.
pub fn from_toml_str(s: &str) -> Result<CodegenConfig, ConfigError> {
    let config: Config = toml::from_str(s)?;
    config.codegen.validate()?;

    Ok(config.codegen)
}

/// Load a config file; a missing file yields the defaults.
pub fn load(path: impl AsRef<Path>) -> Result<CodegenConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(CodegenConfig::default());
    }

    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    from_toml_str(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(from_toml_str("").unwrap(), CodegenConfig::default());
        assert_eq!(from_toml_str("[codegen]").unwrap(), CodegenConfig::default());
    }

    #[test]
    fn keys_override_defaults() {
        let cfg = from_toml_str(
            r#"
            [codegen]
            runtime_path = "crate::rt"
            pretty = false
            default_protocol = "aws_json1_0"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.runtime_path, "crate::rt");
        assert!(!cfg.pretty);
        assert!(cfg.parallel);
        assert_eq!(cfg.default_protocol, Protocol::AwsJson1_0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            from_toml_str("[codegen]\nprety = true"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            from_toml_str("[other]\nx = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn runtime_path_must_be_a_path() {
        assert!(matches!(
            from_toml_str("[codegen]\nruntime_path = \"a::1b\""),
            Err(ConfigError::RuntimePath(_))
        ));
        assert!(from_toml_str("[codegen]\nruntime_path = \"::x::y_z\"").is_ok());
    }

    #[test]
    fn missing_file_is_default() {
        let cfg = load("/nonexistent/shapegen.toml").unwrap();
        assert_eq!(cfg, CodegenConfig::default());
    }
}
