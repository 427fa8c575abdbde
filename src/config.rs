use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BASE_URL, DEFAULT_LOG_FILE, DEFAULT_RELAY_ROUTE,
    DEFAULT_TIMEOUT_SECS,
};

/// How requests reach the management API
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// POST the request descriptor to the relay backend
    #[default]
    Relay,
    /// Call the API endpoint directly
    Direct,
}

/// Runtime configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub mode: TransportMode,
    pub relay_route: String,
    pub timeout_secs: u64,
    /// Accept invalid TLS certificates (lab appliances with self-signed certs)
    pub insecure: bool,
    /// Render the user's own lines as part of the transcript
    pub echo: bool,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            mode: TransportMode::Relay,
            relay_route: DEFAULT_RELAY_ROUTE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            insecure: false,
            echo: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Values given on the command line; `None` keeps the file/default value
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub mode: Option<TransportMode>,
    pub relay_route: Option<String>,
    pub timeout_secs: Option<u64>,
    pub insecure: bool,
    pub echo: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// `~/.catalyst-chat/config.yaml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load from an explicit path, or from the default path when it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to null, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply command-line values on top of this config
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(route) = overrides.relay_route {
            self.relay_route = route;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout_secs = secs;
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = log_file;
        }
        self.insecure |= overrides.insecure;
        self.echo |= overrides.echo;
        self
    }
}
