//! Configuration types for the Raibot MCP Server.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::terrain::{Terrain, STANDARD_ROWS};
use crate::Error;

/// Server configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Server settings
    pub server: ServerSettings,
    /// Storage settings
    pub storage: StorageSettings,
    /// Simulation settings
    pub simulation: SimulationSettings,
}

impl ServerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: ServerConfig =
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::Config("server.name cannot be empty".to_string()));
        }

        // Only the stdio transport is served
        if self.server.transport != "stdio" {
            return Err(Error::Config(format!(
                "unsupported server.transport '{}', expected 'stdio'",
                self.server.transport
            )));
        }

        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(Error::Config("storage.data_dir cannot be empty".to_string()));
        }

        self.simulation.terrain()?;

        Ok(())
    }
}

/// Server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Name reported to clients
    pub name: String,
    /// Transport type (only stdio)
    pub transport: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            name: "raibot".to_string(),
            transport: "stdio".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding location.json, map.json and history.json
    pub data_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

/// Simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Terrain rows of `+` (open) and `X` (obstacle), bottom row first
    pub terrain: Vec<String>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            terrain: STANDARD_ROWS.iter().map(|row| row.to_string()).collect(),
        }
    }
}

impl SimulationSettings {
    /// Build the configured terrain.
    pub fn terrain(&self) -> crate::Result<Terrain> {
        Terrain::from_rows(&self.terrain)
    }
}
