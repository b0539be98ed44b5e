//! Voxsearch: a voice-and-text search client with a SerpAPI relay
//!
//! Two binaries share this crate: `voxsearch-relay`, an HTTP service that
//! forwards queries to SerpAPI with a server-held credential, and
//! `voxsearch`, a terminal client that collects a query by typing or
//! speech and renders the relay's results.

pub mod config;
pub mod network;
pub mod provider;
pub mod relay;
pub mod results;
pub mod speech;
pub mod tui;
pub mod ui;
pub mod web;

pub use config::Settings;
pub use relay::{Relay, RelayError};
pub use results::{OrganicResult, SearchResults};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
