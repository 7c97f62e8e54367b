//! Configuration management for truthdiscovery
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.truthdiscovery/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::args::Verbosity;
use crate::cli::output::{OutputField, OutputFormat};
use crate::errors::{Result, TruthError};
use crate::iteration::StopCondition;

/// Complete configuration for truthdiscovery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub run: RunConfig,
    pub synth: SynthConfig,
    pub logging: LoggingConfig,
}

/// Defaults for the `run` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Iterator used when no `iterator` parameter is given
    pub iterator: String,
    pub output: Vec<String>,
    pub format: String,
}

/// Defaults for the `synth` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub num_vars: usize,
    pub domain_size: usize,
    pub claim_prob: f64,
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbosity: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterator: StopCondition::default().to_string(),
            output: OutputField::DEFAULT
                .iter()
                .map(|field| field.name().to_string())
                .collect(),
            format: OutputFormat::default().name().to_string(),
        }
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            num_vars: 100,
            domain_size: 4,
            claim_prob: 0.5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal.as_str().to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| TruthError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| TruthError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Config::default())
    }

    /// Standard configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".truthdiscovery").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.iterator()
            .map_err(|e| TruthError::Config(format!("Invalid iterator: {}", e)))?;
        self.output_fields()
            .map_err(|e| TruthError::Config(format!("Invalid output: {}", e)))?;
        self.format()
            .map_err(|e| TruthError::Config(format!("Invalid format: {}", e)))?;

        if !(self.synth.claim_prob > 0.0 && self.synth.claim_prob <= 1.0) {
            return Err(TruthError::Config(
                "claim_prob must be in (0, 1]".to_string(),
            ));
        }

        if self.synth.domain_size < 2 {
            return Err(TruthError::Config(
                "domain_size must be at least 2".to_string(),
            ));
        }

        self.verbosity()?;
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| TruthError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| TruthError::Config(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TruthError::Config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Iterator for algorithms run without an explicit `iterator` parameter
    pub fn iterator(&self) -> Result<StopCondition> {
        self.run.iterator.parse()
    }

    /// Output fields for runs without `-o`
    pub fn output_fields(&self) -> Result<Vec<OutputField>> {
        self.run.output.iter().map(|field| field.parse()).collect()
    }

    pub fn format(&self) -> Result<OutputFormat> {
        self.run.format.parse()
    }

    pub fn verbosity(&self) -> Result<Verbosity> {
        self.logging.verbosity.parse()
    }
}
