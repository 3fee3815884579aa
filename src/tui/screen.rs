use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

use crate::core::debounce::Debouncer;
use crate::core::lookup::SuggestionSource;
use crate::core::session::SearchSession;
use crate::core::view::SearchView;
use crate::tui::app::render::{
    StatusInfo, render_header, render_history, render_status, render_suggestions,
};
use crate::tui::events::AppEvent;
use crate::tui::layout::calculate_layout;
use crate::tui::view::{Focus, TerminalView};
use crate::tui::widgets::InputAction;

/// The search widget minus the terminal: routes [`AppEvent`]s into the
/// session, owns the debouncer and spawns lookups.
pub struct SearchScreen {
    session: SearchSession,
    view: TerminalView,
    lookup: Arc<dyn SuggestionSource>,
    debouncer: Debouncer<String>,
    event_tx: UnboundedSender<AppEvent>,
    endpoint: String,
    in_flight: usize,
    spinner_frame: usize,
    should_quit: bool,
}

impl SearchScreen {
    pub fn new(
        session: SearchSession,
        lookup: Arc<dyn SuggestionSource>,
        debounce: Duration,
        leading_edge: bool,
        event_tx: UnboundedSender<AppEvent>,
    ) -> Self {
        let due_tx = event_tx.clone();
        let debouncer = Debouncer::new(
            move |query: String| {
                let _ = due_tx.send(AppEvent::SearchDue(query));
            },
            debounce,
        )
        .with_immediate(leading_edge);

        Self {
            session,
            view: TerminalView::new(),
            lookup,
            debouncer,
            event_tx,
            endpoint: String::new(),
            in_flight: 0,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub const fn session(&self) -> &SearchSession {
        &self.session
    }

    #[must_use]
    pub const fn view(&self) -> &TerminalView {
        &self.view
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(key) => self.handle_key(key),
            AppEvent::Paste(text) => {
                if self.view.focus() == Focus::Input {
                    let action = self.view.input_mut().handle_paste(&text);
                    self.handle_input_action(action);
                }
            }
            AppEvent::Resize(_w, _h) => {}
            AppEvent::Tick => {
                if self.in_flight > 0 {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
            }
            AppEvent::SearchDue(query) => self.start_search(&query),
            AppEvent::SuggestionsLoaded(result) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.session.finish_search(result, &mut self.view);
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let layout = calculate_layout(frame.area());

        render_header(frame, layout.header, &self.endpoint);
        self.view
            .input()
            .render(layout.input, frame, self.view.focus() == Focus::Input);
        render_suggestions(frame, layout.suggestions, &self.view);
        render_history(frame, layout.history, &self.view);
        render_status(
            frame,
            layout.status,
            StatusInfo {
                fetching: self.in_flight > 0,
                spinner_frame: self.spinner_frame,
                suggestion_count: self.view.suggestions().len(),
                no_suggestions: self.view.no_suggestions_visible(),
                focus: self.view.focus(),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.view.toggle_focus();
            return;
        }

        match self.view.focus() {
            Focus::Input => {
                let action = self.view.input_mut().handle_key(key);
                self.handle_input_action(action);
            }
            Focus::History => self.handle_history_key(key),
        }
    }

    fn handle_input_action(&mut self, action: InputAction) {
        match action {
            InputAction::Continue => {}
            InputAction::Edited => {
                let text = self.view.input().text();
                self.debouncer.call(text);
            }
            InputAction::Clear => {
                self.debouncer.cancel();
                self.session.clear_input(&mut self.view);
            }
            InputAction::SuggestionPrev => self.view.select_prev_suggestion(),
            InputAction::SuggestionNext => self.view.select_next_suggestion(),
            InputAction::Submit => {
                if let Some(name) = self.view.selected_suggestion().map(str::to_string) {
                    self.debouncer.cancel();
                    self.session.select(&name, &mut self.view);
                }
            }
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.view.select_prev_history(),
            KeyCode::Down | KeyCode::Char('j') => self.view.select_next_history(),
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
                if let Some(value) = self.view.selected_history().map(|r| r.value.clone()) {
                    self.session.remove_record(&value, &mut self.view);
                }
                if self.view.history_rows().is_empty() {
                    self.view.focus_input();
                }
            }
            KeyCode::Char('C') => {
                self.session.clear_history(&mut self.view);
                self.view.focus_input();
            }
            KeyCode::Esc => self.view.focus_input(),
            _ => {}
        }
    }

    fn start_search(&mut self, query: &str) {
        let Some(query) = self.session.begin_search(query, &mut self.view) else {
            return;
        };

        self.in_flight += 1;
        let lookup = Arc::clone(&self.lookup);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = lookup.fetch_suggestions(&query).await;
            let _ = tx.send(AppEvent::SuggestionsLoaded(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lookup::MockLookup;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tokio::sync::mpsc;

    fn screen_with(lookup: MockLookup) -> (SearchScreen, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let screen = SearchScreen::new(
            SearchSession::default(),
            Arc::new(lookup),
            Duration::from_millis(500),
            false,
            tx,
        )
        .with_endpoint("http://test/name");
        (screen, rx)
    }

    fn screen_text(screen: &SearchScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| screen.draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn draws_suggestions_and_history() {
        let (mut screen, mut rx) = screen_with(MockLookup::new().with_names(["India", "Indonesia"]));

        screen.handle_event(AppEvent::SearchDue("ind".to_string()));
        let loaded = rx.recv().await.unwrap();
        screen.handle_event(loaded);

        let text = screen_text(&screen);
        assert!(text.contains("India"));
        assert!(text.contains("Indonesia"));
        assert!(text.contains("2 suggestions"));
        assert!(text.contains("http://test/name"));

        screen.handle_event(AppEvent::Input(KeyEvent::from(KeyCode::Enter)));
        let text = screen_text(&screen);
        assert!(text.contains("History (1)"));
        assert!(!text.contains("Indonesia"));
    }

    #[tokio::test(start_paused = true)]
    async fn draws_no_suggestions_indicator() {
        let (mut screen, mut rx) = screen_with(MockLookup::new().with_failure("HTTP 404"));

        screen.handle_event(AppEvent::SearchDue("zzzzz".to_string()));
        let loaded = rx.recv().await.unwrap();
        screen.handle_event(loaded);

        assert!(screen_text(&screen).contains("No suggestions found"));
        assert_eq!(screen.in_flight(), 0);
    }

    #[tokio::test]
    async fn ctrl_c_quits() {
        let (mut screen, _rx) = screen_with(MockLookup::new());
        screen.handle_event(AppEvent::Input(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(screen.should_quit());
    }
}
