use std::path::Path;

use anyhow::Result;
use plasma_client::ClientConfig;
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Wallet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Node JSON-RPC endpoint
    pub rpc_url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// Color used when a command does not name one
    pub default_color: u32,

    /// Sort unspent outputs by outpoint before selecting
    pub sort_unspent: bool,

    /// trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        WalletConfig {
            rpc_url: "http://127.0.0.1:8645".to_string(),
            timeout_ms: 10_000,
            default_color: 0,
            sort_unspent: true,
            log_level: "info".to_string(),
        }
    }
}

impl WalletConfig {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: WalletConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            url: self.rpc_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }

    /// Parsed log level, `INFO` if unrecognized
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
