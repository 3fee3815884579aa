//! The surface the search core draws on.
//!
//! The core never owns widgets. It issues these calls and re-derives the
//! history panel from the log on every change, so a view holds no state the
//! log does not already have.

use crate::core::history::HistoryRecord;

pub trait SearchView {
    fn clear_suggestions(&mut self);
    fn render_suggestion_row(&mut self, name: &str);

    fn show_no_suggestions(&mut self);
    fn hide_no_suggestions(&mut self);
    fn no_suggestions_visible(&self) -> bool;

    fn clear_history_panel(&mut self);
    fn render_history_row(&mut self, record: &HistoryRecord);

    fn set_input(&mut self, text: &str);
}

/// Rebuilds the suggestion list. An empty `names` leaves the "no suggestions"
/// indicator alone; only a failed fetch shows it.
pub fn render_suggestions<V, S>(view: &mut V, names: &[S])
where
    V: SearchView + ?Sized,
    S: AsRef<str>,
{
    view.clear_suggestions();
    for name in names {
        view.render_suggestion_row(name.as_ref());
    }
}

pub fn hide_no_suggestion_indicator<V: SearchView + ?Sized>(view: &mut V) {
    if view.no_suggestions_visible() {
        view.hide_no_suggestions();
    }
}

pub fn render_history<V: SearchView + ?Sized>(view: &mut V, records: &[HistoryRecord]) {
    view.clear_history_panel();
    for record in records {
        view.render_history_row(record);
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Plain in-memory view for exercising the core.
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub suggestions: Vec<String>,
        pub history: Vec<HistoryRecord>,
        pub no_suggestions: bool,
        pub input: String,
        pub hide_calls: usize,
    }

    impl RecordingView {
        pub fn history_text(&self) -> Vec<String> {
            self.history
                .iter()
                .map(|r| format!("{} {}", r.value, r.time))
                .collect()
        }
    }

    impl SearchView for RecordingView {
        fn clear_suggestions(&mut self) {
            self.suggestions.clear();
        }

        fn render_suggestion_row(&mut self, name: &str) {
            self.suggestions.push(name.to_string());
        }

        fn show_no_suggestions(&mut self) {
            self.no_suggestions = true;
        }

        fn hide_no_suggestions(&mut self) {
            self.hide_calls += 1;
            self.no_suggestions = false;
        }

        fn no_suggestions_visible(&self) -> bool {
            self.no_suggestions
        }

        fn clear_history_panel(&mut self) {
            self.history.clear();
        }

        fn render_history_row(&mut self, record: &HistoryRecord) {
            self.history.push(record.clone());
        }

        fn set_input(&mut self, text: &str) {
            self.input = text.to_string();
        }
    }
}
