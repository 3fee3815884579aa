mod loops;

pub use loops::{terminal_event_loop, tick_loop};

use crate::core::lookup::FetchResult;
use crossterm::event::KeyEvent;
use std::time::Duration;

pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);
pub const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Everything the UI loop reacts to. Timers and fetch tasks report back
/// through the same channel as the terminal, so state only ever changes on
/// the loop that owns it.
#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
    /// The debounce interval elapsed for this input text.
    SearchDue(String),
    SuggestionsLoaded(FetchResult),
}
