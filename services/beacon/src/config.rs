//! Configuration types for the beacon service

use beacon_core::Catalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Catalog::homelab")]
    pub services: Catalog,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            services: Catalog::homelab(),
            server: ServerConfig::default(),
            page: PageConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl Config {
    /// Check the catalog for duplicate or empty names.
    ///
    /// In strict mode the first issue is an error; otherwise each issue is
    /// logged and the catalog is used as is.
    pub fn validate(&self) -> crate::Result<()> {
        if self.validation.strict {
            self.services.validate_strict()?;
            return Ok(());
        }

        for issue in self.services.issues() {
            tracing::warn!("Catalog: {}", issue);
        }
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the built front end (trunk `dist`), served under `/app`
    #[serde(default)]
    pub app_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            app_dir: None,
        }
    }
}

/// Page presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            search_placeholder: default_search_placeholder(),
        }
    }
}

/// Catalog validation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub strict: bool,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    11120
}

fn default_title() -> String {
    "Homelab".to_string()
}

fn default_search_placeholder() -> String {
    "Search services... (press / to focus)".to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::BeaconError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
