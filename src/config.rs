//! Configuration handling for the TUI

use crate::state::{DEFAULT_INFORMATION_ENDPOINT, DEFAULT_ORDER_ENDPOINT};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the order endpoint
pub const ORDER_ENDPOINT_ENV: &str = "BLOOM_ORDER_ENDPOINT";
/// Environment variable overriding the information endpoint
pub const INFORMATION_ENDPOINT_ENV: &str = "BLOOM_INFORMATION_ENDPOINT";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// File name of the log written while the TUI owns the terminal
pub const LOG_FILE_NAME: &str = "bloom-forms.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Pizza order submission URL
    pub order_endpoint: Option<String>,
    /// Information form submission URL
    pub information_endpoint: Option<String>,
    /// Route shown at startup
    pub start_path: Option<String>,
    /// Per-request timeout
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "bloom", "bloom-forms")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory holding the log file; the temp dir when no home is known
    pub fn log_dir() -> PathBuf {
        ProjectDirs::from("io", "bloom", "bloom-forms")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup; empty values are ignored
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ORDER_ENDPOINT_ENV).filter(|v| !v.is_empty()) {
            self.order_endpoint = Some(url);
        }
        if let Some(url) = lookup(INFORMATION_ENDPOINT_ENV).filter(|v| !v.is_empty()) {
            self.information_endpoint = Some(url);
        }
    }

    pub fn order_endpoint(&self) -> &str {
        self.order_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ORDER_ENDPOINT)
    }

    pub fn information_endpoint(&self) -> &str {
        self.information_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_INFORMATION_ENDPOINT)
    }

    pub fn start_path(&self) -> &str {
        self.start_path.as_deref().unwrap_or("/")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
