//! Blocking client for the relay service, used by the terminal interface

use crate::config::ClientSettings;
use crate::results::SearchResults;
use anyhow::{bail, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Client for `GET /api/search` on the relay.
///
/// Blocking on purpose: the terminal client runs searches from spawned
/// worker threads, never from an async runtime.
#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn with_settings(settings: &ClientSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .user_agent(format!("voxsearch/{}", crate::VERSION))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.relay_url.clone(),
        })
    }

    /// Build the relay search URL with the query percent-encoded
    fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.set_path("/api/search");
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    /// Submit a query and parse the organic results out of the response
    pub fn search(&self, query: &str) -> Result<SearchResults> {
        let url = self.search_url(query)?;
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            bail!("relay returned status {}", status.as_u16());
        }

        let results: SearchResults = response.json()?;
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RelayClient {
        RelayClient::with_settings(&ClientSettings::default()).unwrap()
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = client().search_url("rust language?").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:5000/api/search?q=rust+language%3F"
        );
    }

    #[test]
    fn test_search_url_keeps_empty_query() {
        let url = client().search_url("").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/search?q=");
    }
}
