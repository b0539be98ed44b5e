//! Upstream search provider
//!
//! The relay forwards every query to SerpAPI; this module builds the
//! upstream request. The response body is carried as opaque text, since the
//! relay passes it through without parsing.

use crate::config::UpstreamSettings;

/// HTTP request to be made against the provider
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// Fully encoded URL, credential included
    pub url: String,
}

/// HTTP response from a provider request
#[derive(Debug)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl ProviderResponse {
    /// Parse the body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> anyhow::Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if the response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// SerpAPI request builder
#[derive(Debug, Clone)]
pub struct SerpApi {
    base_url: String,
    api_key: String,
}

impl SerpApi {
    pub fn new(settings: &UpstreamSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    /// Build the upstream request for a raw query string.
    ///
    /// The query is percent-encoded here; an empty query is embedded as-is
    /// (`q=`) and left for the provider to reject or answer.
    pub fn request(&self, query: &str) -> ProviderRequest {
        ProviderRequest {
            url: format!(
                "{}?q={}&api_key={}",
                self.base_url,
                urlencoding::encode(query),
                self.api_key
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> SerpApi {
        SerpApi::new(&UpstreamSettings {
            base_url: "https://serpapi.com/search.json".to_string(),
            api_key: "secret-key".to_string(),
            request_timeout: 10.0,
        })
    }

    #[test]
    fn test_request_embeds_query_and_key() {
        let request = provider().request("cats");
        assert_eq!(
            request.url,
            "https://serpapi.com/search.json?q=cats&api_key=secret-key"
        );
    }

    #[test]
    fn test_request_percent_encodes_query() {
        let request = provider().request("rust language?");
        assert_eq!(
            request.url,
            "https://serpapi.com/search.json?q=rust%20language%3F&api_key=secret-key"
        );
    }

    #[test]
    fn test_empty_query_is_forwarded_as_is() {
        let request = provider().request("");
        assert_eq!(
            request.url,
            "https://serpapi.com/search.json?q=&api_key=secret-key"
        );
    }

    #[test]
    fn test_response_success_range() {
        let ok = ProviderResponse {
            status: 204,
            text: String::new(),
        };
        let err = ProviderResponse {
            status: 404,
            text: String::new(),
        };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }

    #[test]
    fn test_response_json() {
        let response = ProviderResponse {
            status: 200,
            text: r#"{"organic_results": []}"#.to_string(),
        };
        let parsed: serde_json::Value = response.json().unwrap();
        assert!(parsed["organic_results"].as_array().unwrap().is_empty());
    }
}
