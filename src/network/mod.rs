//! Network layer
//!
//! Two clients live here: the relay's async upstream client, and the
//! blocking client the terminal interface uses to reach the relay.

mod client;
mod relay_client;

pub use client::HttpClient;
pub use relay_client::RelayClient;
