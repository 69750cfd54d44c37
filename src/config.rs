//! Bridge Configuration
//!
//! Handles parsing and management of odevec.toml configuration files.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

static GLOBAL: Lazy<BridgeConfig> = Lazy::new(|| {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| BridgeConfig::find_and_load(&cwd).ok())
        .unwrap_or_default()
});

/// Root configuration structure matching odevec.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BridgeConfig {
    /// Allocation limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl BridgeConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: BridgeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join("odevec.toml");
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                // Reached root without finding config
                return Ok(Self::default());
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Process-wide configuration used by the vector factory. Loaded from the
    /// working directory (or its parents) once; defaults when no file exists.
    pub fn global() -> &'static BridgeConfig {
        &GLOBAL
    }
}

/// Allocation limits for vectors handed to the host runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum element count `new_vector` will attempt to allocate
    #[serde(default = "default_max_vector_len")]
    pub max_vector_len: usize,
}

fn default_max_vector_len() -> usize {
    // Largest f64 buffer the address space can represent
    isize::MAX as usize / std::mem::size_of::<f64>()
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_vector_len: default_max_vector_len(),
        }
    }
}
