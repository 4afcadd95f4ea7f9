//! Terminal user interface for the catalog manager

pub mod app;
pub mod events;
pub mod refresh;
pub mod screens;
pub mod state;
pub mod theme;

use crate::Result;

/// Entry point for the catalog manager UI
pub async fn run() -> Result<()> {
    let app = app::App::new();
    app.run().await
}
