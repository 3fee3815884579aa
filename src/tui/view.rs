use crate::core::history::HistoryRecord;
use crate::core::view::SearchView;
use crate::tui::widgets::SearchInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    History,
}

/// Terminal-side state the core draws into: the search box, the suggestion
/// rows, the "no suggestions" flag and the history rows, plus cursor and
/// focus bookkeeping that only the terminal needs.
///
/// Row text is stripped of control characters on the way in, so nothing a
/// lookup service returns can emit escape sequences.
#[derive(Default)]
pub struct TerminalView {
    input: SearchInput<'static>,
    suggestions: Vec<String>,
    selected_suggestion: usize,
    no_suggestions: bool,
    history: Vec<HistoryRecord>,
    selected_history: usize,
    focus: Focus,
}

impl TerminalView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn input(&self) -> &SearchInput<'static> {
        &self.input
    }

    pub const fn input_mut(&mut self) -> &mut SearchInput<'static> {
        &mut self.input
    }

    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    #[must_use]
    pub fn history_rows(&self) -> &[HistoryRecord] {
        &self.history
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if !self.history.is_empty() => Focus::History,
            _ => Focus::Input,
        };
    }

    pub const fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    #[must_use]
    pub fn selected_suggestion_index(&self) -> Option<usize> {
        clamp(self.selected_suggestion, self.suggestions.len())
    }

    #[must_use]
    pub fn selected_suggestion(&self) -> Option<&str> {
        self.selected_suggestion_index()
            .map(|i| self.suggestions[i].as_str())
    }

    pub fn select_next_suggestion(&mut self) {
        self.selected_suggestion = next(self.selected_suggestion, self.suggestions.len());
    }

    pub fn select_prev_suggestion(&mut self) {
        self.selected_suggestion = prev(self.selected_suggestion, self.suggestions.len());
    }

    #[must_use]
    pub fn selected_history_index(&self) -> Option<usize> {
        clamp(self.selected_history, self.history.len())
    }

    #[must_use]
    pub fn selected_history(&self) -> Option<&HistoryRecord> {
        self.selected_history_index().map(|i| &self.history[i])
    }

    pub fn select_next_history(&mut self) {
        let current = self.selected_history_index().unwrap_or(0);
        self.selected_history = next(current, self.history.len());
    }

    pub fn select_prev_history(&mut self) {
        let current = self.selected_history_index().unwrap_or(0);
        self.selected_history = prev(current, self.history.len());
    }
}

impl SearchView for TerminalView {
    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.selected_suggestion = 0;
    }

    fn render_suggestion_row(&mut self, name: &str) {
        self.suggestions.push(sanitize(name));
    }

    fn show_no_suggestions(&mut self) {
        self.no_suggestions = true;
    }

    fn hide_no_suggestions(&mut self) {
        self.no_suggestions = false;
    }

    fn no_suggestions_visible(&self) -> bool {
        self.no_suggestions
    }

    fn clear_history_panel(&mut self) {
        self.history.clear();
    }

    fn render_history_row(&mut self, record: &HistoryRecord) {
        self.history
            .push(HistoryRecord::new(sanitize(&record.value), sanitize(&record.time)));
    }

    fn set_input(&mut self, text: &str) {
        if text.is_empty() {
            self.input.clear();
        } else {
            self.input.set_text(text);
        }
    }
}

fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

fn clamp(index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| index.min(len - 1))
}

fn next(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}

fn prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 || index >= len {
        len - 1
    } else {
        index - 1
    }
}
