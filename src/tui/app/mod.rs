pub(crate) mod render;
mod terminal;

use crate::core::error::Result;
use crate::tui::events::{AppEvent, terminal_event_loop, tick_loop};
use crate::tui::screen::SearchScreen;
use crossterm::ExecutableCommand;
use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use tokio::sync::mpsc;

use terminal::{restore_terminal, setup_terminal};

pub struct TuiApp {
    screen: SearchScreen,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TuiApp {
    pub(crate) fn with_event_channels(
        screen: SearchScreen,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<Self> {
        let terminal = setup_terminal()?;

        Ok(Self {
            screen,
            event_rx,
            event_tx,
            terminal,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let tx1 = self.event_tx.clone();
        let tx2 = self.event_tx.clone();

        tokio::spawn(async move {
            if let Err(e) = terminal_event_loop(tx1).await {
                tracing::error!(error = %e, "terminal event loop stopped");
            }
        });

        tokio::spawn(async move {
            tick_loop(tx2).await;
        });

        while !self.screen.should_quit() {
            let screen = &self.screen;
            self.terminal.draw(|f| screen.draw(f))?;

            match self.event_rx.recv().await {
                Some(event) => self.screen.handle_event(event),
                None => break,
            }
        }

        restore_terminal(&mut self.terminal)?;

        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        use crossterm::event::DisableBracketedPaste;
        let _ = self.terminal.backend_mut().execute(DisableBracketedPaste);
        let _ = disable_raw_mode();
        let _ = self.terminal.backend_mut().execute(LeaveAlternateScreen);
    }
}
