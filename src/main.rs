//! Voxsearch relay daemon
//!
//! Accepts `GET /api/search?q=...`, forwards the query to SerpAPI with the
//! configured credential, and returns the provider's JSON body unchanged.

use anyhow::Result;
use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use voxsearch::{
    config,
    web::{create_router, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting voxsearch-relay v{}", voxsearch::VERSION);

    let settings = config::load()?;

    // Every upstream request embeds the key; refuse to start without one
    // rather than forwarding queries that can only fail.
    if settings.upstream.api_key.is_empty() {
        anyhow::bail!(
            "SERPAPI_KEY is not set; the relay cannot reach the search provider without it"
        );
    }

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    let state = AppState::new(settings)?;
    let app = create_router(state);

    info!("Relay listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
