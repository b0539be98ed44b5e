//! Settings structures for voxsearch configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure shared by the relay daemon and the terminal client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub client: ClientSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SERPAPI_KEY") {
            self.upstream.api_key = val;
        }
        if let Ok(val) = std::env::var("VOXSEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("VOXSEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("VOXSEARCH_RELAY_URL") {
            self.client.relay_url = val;
        }
        if let Ok(val) = std::env::var("VOXSEARCH_TRANSCRIBER") {
            self.client.transcriber = Some(val);
        }
    }
}

/// Relay server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Upstream search provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Provider endpoint queries are forwarded to
    pub base_url: String,
    /// API key sent with every upstream request; the relay refuses to start
    /// without one
    pub api_key: String,
    /// Upstream request timeout in seconds
    pub request_timeout: f64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "https://serpapi.com/search.json".to_string(),
            api_key: String::new(),
            request_timeout: 10.0,
        }
    }
}

/// Terminal client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the relay service
    pub relay_url: String,
    /// Relay request timeout in seconds
    pub request_timeout: f64,
    /// Speech-to-text command spawned per capture, split on whitespace
    /// (no shell quoting). Unset means voice input is disabled.
    pub transcriber: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            relay_url: "http://127.0.0.1:5000".to_string(),
            request_timeout: 10.0,
            transcriber: None,
        }
    }
}
