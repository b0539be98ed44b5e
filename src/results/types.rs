//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single organic search result
///
/// Only the fields the interface renders are modeled; unknown provider
/// fields are ignored during deserialization, and absent ones default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganicResult {
    /// 1-based rank assigned by the provider
    #[serde(default)]
    pub position: u32,
    /// Result title
    #[serde(default)]
    pub title: String,
    /// Full target URL
    #[serde(default)]
    pub link: String,
    /// Content snippet
    #[serde(default)]
    pub snippet: String,
    /// Shortened URL shown beneath the title
    #[serde(default)]
    pub displayed_link: String,
}

/// The slice of the provider payload the interface consumes
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResults {
    /// Organic results in provider order
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_provider_payload() {
        let payload = r#"{
            "search_metadata": {"status": "Success"},
            "organic_results": [
                {
                    "position": 1,
                    "title": "Rust Programming Language",
                    "link": "https://www.rust-lang.org/",
                    "snippet": "A language empowering everyone.",
                    "displayed_link": "www.rust-lang.org",
                    "favicon": "https://serpapi.com/favicon.ico"
                },
                {"position": 2, "title": "crates.io", "link": "https://crates.io/"}
            ]
        }"#;

        let results: SearchResults = serde_json::from_str(payload).unwrap();
        assert_eq!(results.organic_results.len(), 2);
        assert_eq!(results.organic_results[0].title, "Rust Programming Language");
        assert_eq!(results.organic_results[0].displayed_link, "www.rust-lang.org");
        assert_eq!(results.organic_results[1].snippet, "");
    }

    #[test]
    fn test_missing_results_field_parses_as_empty() {
        let results: SearchResults = serde_json::from_str("{}").unwrap();
        assert!(results.organic_results.is_empty());
    }

    #[test]
    fn test_provider_order_is_preserved() {
        let payload = r#"{"organic_results": [
            {"position": 3, "title": "c"},
            {"position": 1, "title": "a"},
            {"position": 2, "title": "b"}
        ]}"#;

        let results: SearchResults = serde_json::from_str(payload).unwrap();
        let titles: Vec<&str> = results
            .organic_results
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }
}
