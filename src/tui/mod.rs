//! Terminal shell for the search interface

mod app;
mod render;

pub use app::{App, SearchMessage};
pub use render::draw;
