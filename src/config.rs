//! Engine configuration management via TOML files.
//!
//! Defaults match the reference learning constants; any field may be
//! overridden from an `[engine]` section.

use std::fs;
use std::path::Path;

use serde::Serialize;
use toml::Value;

/// Engine configuration loaded from a TOML file.
///
/// # Examples
///
/// ```
/// use chunking_cognition_core::EngineConfig;
///
/// let config = EngineConfig::load_from_file("config/engine.toml")
///     .unwrap_or_else(|_| EngineConfig::default());
///
/// assert!(config.stm_capacity >= 1);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct EngineConfig {
    /// Maximum short-term memory length per modality
    pub stm_capacity: usize,
    /// Image-overlap count that triggers a similarity link
    pub similarity_threshold: usize,
    /// Clock cost of discrimination, test addition, and primitive learning
    pub discrimination_time: u64,
    /// Clock cost of familiarisation
    pub familiarisation_time: u64,
    /// Clock cost reserved for link addition; no operator consumes it
    pub add_link_time: u64,
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let value: Value =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let table = value
            .get("engine")
            .and_then(|v| v.as_table())
            .cloned()
            .unwrap_or_default();

        let defaults = Self::default();

        let stm_capacity = table
            .get("stm_capacity")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(1) as usize)
            .unwrap_or(defaults.stm_capacity);

        let similarity_threshold = table
            .get("similarity_threshold")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(0) as usize)
            .unwrap_or(defaults.similarity_threshold);

        let discrimination_time = table
            .get("discrimination_time")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(0) as u64)
            .unwrap_or(defaults.discrimination_time);

        let familiarisation_time = table
            .get("familiarisation_time")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(0) as u64)
            .unwrap_or(defaults.familiarisation_time);

        let add_link_time = table
            .get("add_link_time")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(0) as u64)
            .unwrap_or(defaults.add_link_time);

        Ok(Self {
            stm_capacity,
            similarity_threshold,
            discrimination_time,
            familiarisation_time,
            add_link_time,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stm_capacity: 2,
            similarity_threshold: 5,
            discrimination_time: 10_000,
            familiarisation_time: 2_000,
            add_link_time: 10_000,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_config_defaults_when_section_missing() {
        let config = EngineConfig::from_str("").unwrap();
        assert_eq!(config.stm_capacity, 2);
        assert_eq!(config.similarity_threshold, 5);
        assert_eq!(config.discrimination_time, 10_000);
        assert_eq!(config.familiarisation_time, 2_000);
        assert_eq!(config.add_link_time, 10_000);
    }

    #[test]
    fn engine_config_parses_custom_values() {
        let toml =
            "[engine]\nstm_capacity = 4\nsimilarity_threshold = 3\nfamiliarisation_time = 500";
        let config = EngineConfig::from_str(toml).unwrap();
        assert_eq!(config.stm_capacity, 4);
        assert_eq!(config.similarity_threshold, 3);
        assert_eq!(config.familiarisation_time, 500);
        assert_eq!(config.discrimination_time, 10_000);
    }

    #[test]
    fn engine_config_clamps_capacity_to_one() {
        let config = EngineConfig::from_str("[engine]\nstm_capacity = 0").unwrap();
        assert_eq!(config.stm_capacity, 1);
    }

    #[test]
    fn engine_config_rejects_invalid_toml() {
        assert!(EngineConfig::from_str("not toml [").is_err());
    }
}
