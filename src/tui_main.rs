//! Voxsearch terminal client
//!
//! Collects a query by typing or speech, submits it to the relay, and
//! renders the organic results.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use voxsearch::{config, speech::SpeechCapability, tui::App};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging()?;

    let settings = config::load()?;
    let capability = SpeechCapability::probe(&settings.client);
    let mut app = App::new(&settings, capability)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

/// Log to a file only when `VOXSEARCH_LOG` names one; anything written to
/// stderr would tear up the terminal UI.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("VOXSEARCH_LOG") else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
