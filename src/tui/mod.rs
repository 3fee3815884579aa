pub mod app;
pub mod events;
pub mod layout;
pub mod screen;
pub mod view;
pub mod widgets;

pub use app::TuiApp;
pub use events::AppEvent;
pub use screen::SearchScreen;
pub use view::{Focus, TerminalView};

use crate::config::AppConfig;
use crate::core::error::Result;
use crate::core::lookup::CountryLookup;
use crate::core::session::SearchSession;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn run_tui(config: &AppConfig) -> Result<()> {
    let lookup = CountryLookup::new(&config.lookup_config())?;
    let endpoint = lookup.base_url().to_string();

    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let screen = SearchScreen::new(
        SearchSession::new(config.time_format.clone()),
        Arc::new(lookup),
        config.debounce(),
        config.leading_edge,
        event_tx.clone(),
    )
    .with_endpoint(endpoint);

    tracing::info!(
        base_url = %config.base_url,
        debounce_ms = config.debounce_ms,
        leading_edge = config.leading_edge,
        "starting search UI"
    );

    let mut app = TuiApp::with_event_channels(screen, event_tx, event_rx)?;
    app.run().await
}
