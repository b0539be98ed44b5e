//! Query relay
//!
//! Forwards one query to the upstream provider and hands the body back
//! verbatim. Failures are classified for the server log only; callers get a
//! single generic message regardless of what went wrong upstream.

use crate::config::Settings;
use crate::network::HttpClient;
use crate::provider::SerpApi;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, warn};

/// What went wrong upstream. Logged, never forwarded.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("upstream request timed out")]
    Timeout,
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("upstream network error: {0}")]
    Network(String),
}

impl RelayError {
    /// The one message callers are allowed to see
    pub fn public_message(&self) -> &'static str {
        "Error fetching results from SerpAPI"
    }
}

/// Stateless forwarder: provider request builder plus an HTTP client
pub struct Relay {
    client: HttpClient,
    provider: SerpApi,
}

impl Relay {
    pub fn new(client: HttpClient, provider: SerpApi) -> Self {
        Self { client, provider }
    }

    pub fn with_settings(settings: &Settings) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(&settings.upstream)?;
        let provider = SerpApi::new(&settings.upstream);
        Ok(Self::new(client, provider))
    }

    /// Forward one raw query upstream; on 2xx return the body unchanged.
    ///
    /// No retry is attempted. The query is not validated here; emptiness is
    /// the provider's problem.
    pub async fn search(&self, raw_query: &str) -> Result<String, RelayError> {
        let request = self.provider.request(raw_query);
        let started = Instant::now();

        match self.client.execute(request).await {
            Ok(response) if response.is_success() => {
                debug!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "upstream search succeeded"
                );
                Ok(response.text)
            }
            Ok(response) => {
                warn!(status = response.status, "upstream rejected the query");
                Err(RelayError::Status(response.status))
            }
            Err(e) => {
                if let Some(re) = e.downcast_ref::<reqwest::Error>() {
                    if re.is_timeout() {
                        return Err(RelayError::Timeout);
                    }
                }
                Err(RelayError::Network(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_message_is_fixed_across_variants() {
        let variants = [
            RelayError::Timeout,
            RelayError::Status(503),
            RelayError::Network("connection refused".to_string()),
        ];
        for e in variants {
            assert_eq!(e.public_message(), "Error fetching results from SerpAPI");
        }
    }

    #[test]
    fn test_error_display_carries_detail_for_logs() {
        let e = RelayError::Status(429);
        assert_eq!(e.to_string(), "upstream returned status 429");
    }
}
