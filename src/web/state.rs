//! Application state shared across handlers

use crate::config::Settings;
use crate::relay::Relay;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Query relay
    pub relay: Arc<Relay>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let relay = Arc::new(Relay::with_settings(&settings)?);

        Ok(Self {
            settings: Arc::new(settings),
            relay,
        })
    }
}
