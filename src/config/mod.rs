/// Configuration management for the chat relay
///
/// Handles server settings and on-disk persistence of the Discord webhook URL.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Storage configuration
    pub storage: StorageConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "127.0.0.1")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// On-disk storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the JSON file holding the webhook URL (default: "config.json")
    pub config_file: String,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for headless deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("CHATRELAY_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: std::env::var("CHATRELAY_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .unwrap_or(8000),
            },
            storage: StorageConfig {
                config_file: std::env::var("CHATRELAY_CONFIG")
                    .unwrap_or_else(|_| "config.json".to_string()),
            },
        }
    }
}

/// Shape of the persisted config file
///
/// Unknown keys in the file are ignored; a missing key behaves as absent.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredConfig {
    #[serde(default)]
    discord_webhook_url: String,
}

/// File-backed store for the single persisted setting
///
/// Reads go straight to disk on every call so an edited config.json takes
/// effect without restarting the server. There is no cache and no
/// invalidation.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Location of the JSON config file
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored webhook URL
    ///
    /// Every failure mode degrades to "absent": a missing file, an unreadable
    /// file, and malformed JSON all yield an empty string. Callers apply the
    /// prefix check themselves.
    pub fn load(&self) -> String {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str::<StoredConfig>(&raw)
                .map(|stored| stored.discord_webhook_url)
                .unwrap_or_default(),
            Err(_) => String::new(),
        }
    }

    /// Overwrite the config file with the given webhook URL
    ///
    /// Fails only on unrecoverable I/O (permissions, disk full); the caller
    /// decides whether that is fatal.
    pub fn save(&self, url: &str) -> Result<()> {
        let stored = StoredConfig {
            discord_webhook_url: url.to_string(),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }
}
