// src/config/quiz_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main quiz configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Number of elements in the underlying set
    pub set_size: usize,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Fixed RNG seed for a reproducible session; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            set_size: 4,
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("set_size", 4)?
            .set_default("log_level", "info")?;

        // Try to load from a config file
        if Path::new("relquiz.toml").exists() {
            builder = builder.add_source(File::with_name("relquiz.toml"));
        }

        // Override with environment variables (prefix: RELQUIZ_)
        builder = builder.add_source(Environment::with_prefix("RELQUIZ").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("set_size", 4)?
            .set_default("log_level", "info")?;

        // Load from specified file
        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        // Override with environment variables (prefix: RELQUIZ_)
        builder = builder.add_source(Environment::with_prefix("RELQUIZ").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.set_size, 4);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = QuizConfig::load().unwrap_or_else(|_| QuizConfig::default());
        assert_eq!(config.set_size, 4);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let path = std::env::temp_dir().join("relquiz_test_config.toml");
        std::fs::write(&path, "set_size = 6\nlog_level = \"debug\"\n").unwrap();

        let config = QuizConfig::load_from_file(&path).unwrap();
        assert_eq!(config.set_size, 6);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.seed, None);

        std::fs::remove_file(&path).ok();
    }
}
