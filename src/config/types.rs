use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, including the `/api/` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 30).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Local session persistence settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where the access/refresh tokens are kept.
    /// `None` means `<data_dir>/vota-informado/session.toml`.
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/".to_string()
}

fn default_connect_timeout() -> u32 {
    30
}

fn default_timeout() -> u32 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl SessionConfig {
    /// Resolve the token file location, falling back to the platform data dir.
    pub fn resolved_token_path(&self) -> PathBuf {
        match &self.token_path {
            Some(path) => path.clone(),
            None => {
                let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
                data_dir.join("vota-informado").join("session.toml")
            }
        }
    }
}
