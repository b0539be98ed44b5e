//! HTTP client for upstream provider requests

use crate::config::UpstreamSettings;
use crate::provider::{ProviderRequest, ProviderResponse};
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

/// HTTP client wrapper used by the relay for upstream calls
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&UpstreamSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &UpstreamSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .build()?;

        Ok(Self {
            client,
            user_agent: format!("voxsearch/{}", crate::VERSION),
        })
    }

    /// Execute a provider request.
    ///
    /// Errors are stripped of their URL before they propagate, so the
    /// credential embedded in the query string never reaches a log line.
    pub async fn execute(&self, request: ProviderRequest) -> Result<ProviderResponse> {
        let response = self
            .client
            .get(&request.url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e.without_url()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| anyhow::Error::new(e.without_url()))?;

        Ok(ProviderResponse { status, text })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_carries_version() {
        let client = HttpClient::new().unwrap();
        assert_eq!(client.user_agent(), format!("voxsearch/{}", crate::VERSION));
    }
}
