//! Generator configuration files
//!
//! A configuration bundles the road parameters with the tile palette and an
//! optional fixed seed, stored as JSON so layouts can be shared and tuned
//! without recompiling.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::palette::TilePalette;
use crate::roads::{RoadGenerator, RoadParams, RoadPreset};

const CONFIG_VERSION: u32 = 1;

/// Complete generator configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Format version for forward compatibility
    pub version: u32,
    /// Fixed seed; a random one is drawn when absent
    pub seed: Option<u64>,
    pub params: RoadParams,
    pub palette: TilePalette,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            seed: None,
            params: RoadParams::default(),
            palette: TilePalette::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_preset(preset: RoadPreset) -> Self {
        Self {
            params: preset.params(),
            ..Self::default()
        }
    }

    pub fn generator(&self) -> RoadGenerator {
        RoadGenerator::new(self.params.clone(), self.palette.clone())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&text)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(config.version));
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Errors from reading or writing configuration files
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// File written by a newer format
    UnsupportedVersion(u32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid configuration: {}", e),
            ConfigError::UnsupportedVersion(v) => write!(
                f,
                "Configuration version {} is newer than supported version {}",
                v, CONFIG_VERSION
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
