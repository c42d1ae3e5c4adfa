//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub output: OutputConfig,
}

/// Where the fitted vectorizer and regressor live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub artifacts_dir: PathBuf,
    pub vectorizer_file: String,
    pub regressor_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models: ModelConfig {
                artifacts_dir: PathBuf::from("model"),
                vectorizer_file: "tfidf.json".to_string(),
                regressor_file: "reg.json".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    /// Load the configuration from the default location, writing defaults
    /// there on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Self::reset_at(&config_path)
        }
    }

    /// Load from an explicit path. Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeMatcherError::Configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to parse config: {}", e)))
    }

    /// Overwrite `path` with the defaults without reading what is there, so a
    /// file that no longer parses can still be repaired.
    pub fn reset_at(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    pub fn vectorizer_path(&self) -> PathBuf {
        self.models.artifacts_dir.join(&self.models.vectorizer_file)
    }

    pub fn regressor_path(&self) -> PathBuf {
        self.models.artifacts_dir.join(&self.models.regressor_file)
    }

    pub fn with_artifacts_dir(mut self, dir: PathBuf) -> Self {
        self.models.artifacts_dir = dir;
        self
    }
}
