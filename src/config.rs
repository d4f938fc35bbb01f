//! # Configuration Management
//!
//! Decode policies for the u128 codec and the default document format.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()` or strings via `from_toml()`
//! - Environment variables via `from_env()`
//! - Direct instantiation with defaults and `default_with_overrides()`

use crate::core::codec::{DEFAULT_MAX_LITERAL_LEN, MAX_DIGITS};
use crate::core::serialization::SerializationFormat;
use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Upper bound for `max_literal_len`
pub const MAX_LITERAL_LEN_LIMIT: usize = 4096;

/// Environment variable names
pub const ENV_ALLOW_LEADING_ZEROS: &str = "U128_JSON_ALLOW_LEADING_ZEROS";
pub const ENV_MAX_LITERAL_LEN: &str = "U128_JSON_MAX_LITERAL_LEN";
pub const ENV_FORMAT: &str = "U128_JSON_FORMAT";

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Accept decimal spans such as "007"
    pub allow_leading_zeros: bool,

    /// Longest raw span decode will look at, in bytes
    pub max_literal_len: usize,

    /// Format used by `MultiFormat::serialize_configured` and `deserialize_configured`
    pub format: SerializationFormat,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            allow_leading_zeros: true,
            max_literal_len: DEFAULT_MAX_LITERAL_LEN,
            format: SerializationFormat::default(),
        }
    }
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| CodecError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| CodecError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| CodecError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unparseable values are logged and ignored; an unknown format name is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(flag) = lookup(ENV_ALLOW_LEADING_ZEROS) {
            match flag.parse::<bool>() {
                Ok(val) => config.allow_leading_zeros = val,
                Err(_) => warn!(key = ENV_ALLOW_LEADING_ZEROS, value = %flag, "ignoring invalid boolean"),
            }
        }

        if let Some(len) = lookup(ENV_MAX_LITERAL_LEN) {
            match len.parse::<usize>() {
                Ok(val) => config.max_literal_len = val,
                Err(_) => warn!(key = ENV_MAX_LITERAL_LEN, value = %len, "ignoring invalid length"),
            }
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.parse()?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CodecError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| CodecError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_literal_len < MAX_DIGITS {
            errors.push(format!(
                "Max literal length too small: {} (minimum: {MAX_DIGITS}, the digits of u128::MAX)",
                self.max_literal_len
            ));
        } else if self.max_literal_len > MAX_LITERAL_LEN_LIMIT {
            errors.push(format!(
                "Max literal length too large: {} (maximum: {MAX_LITERAL_LEN_LIMIT})",
                self.max_literal_len
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CodecError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}
