use crate::core::history::{DEFAULT_TIME_FORMAT, HistoryRecord, SearchHistory};
use crate::core::lookup::{FetchResult, SuggestionSource};
use crate::core::view::{SearchView, hide_no_suggestion_indicator, render_history, render_suggestions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Idle,
    Fetching,
    Showing,
    ShowingNoSuggestions,
}

/// Owns the search history and the input state, and applies each user action
/// to a [`SearchView`].
///
/// Fetching is split in two so the caller decides where the request runs:
/// [`begin_search`](Self::begin_search) says whether a request is needed, and
/// [`finish_search`](Self::finish_search) applies whatever comes back.
/// Responses are applied in arrival order, so a slow earlier request can
/// overwrite a newer one.
#[derive(Debug, Clone)]
pub struct SearchSession {
    history: SearchHistory,
    state: InputState,
    time_format: String,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT)
    }
}

impl SearchSession {
    #[must_use]
    pub fn new(time_format: impl Into<String>) -> Self {
        Self {
            history: SearchHistory::new(),
            state: InputState::Idle,
            time_format: time_format.into(),
        }
    }

    #[must_use]
    pub const fn history(&self) -> &SearchHistory {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> InputState {
        self.state
    }

    /// Called when the debounce timer fires. Returns the query to fetch, or
    /// `None` when the input is empty and the list was simply cleared.
    pub fn begin_search<V: SearchView + ?Sized>(
        &mut self,
        query: &str,
        view: &mut V,
    ) -> Option<String> {
        view.clear_suggestions();

        if query.is_empty() {
            self.state = InputState::Idle;
            return None;
        }

        tracing::debug!(query, "fetching suggestions");
        self.state = InputState::Fetching;
        Some(query.to_string())
    }

    pub fn finish_search<V: SearchView + ?Sized>(&mut self, result: FetchResult, view: &mut V) {
        match result {
            Ok(names) => {
                tracing::debug!(count = names.len(), "suggestions loaded");
                hide_no_suggestion_indicator(view);
                render_suggestions(view, &names);
                self.state = InputState::Showing;
            }
            Err(err) => {
                tracing::warn!(error = %err, "no suggestions");
                view.show_no_suggestions();
                self.state = InputState::ShowingNoSuggestions;
            }
        }
    }

    /// Runs a whole search inline: begin, fetch, finish.
    pub async fn search<S, V>(&mut self, source: &S, query: &str, view: &mut V)
    where
        S: SuggestionSource + ?Sized,
        V: SearchView + ?Sized,
    {
        if let Some(query) = self.begin_search(query, view) {
            let result = source.fetch_suggestions(&query).await;
            self.finish_search(result, view);
        }
    }

    /// Picks a suggestion, stamping it with the current local time. Empty
    /// values are ignored and `false` is returned.
    pub fn select<V: SearchView + ?Sized>(&mut self, value: &str, view: &mut V) -> bool {
        if value.is_empty() {
            return false;
        }
        self.select_record(HistoryRecord::now(value, &self.time_format), view);
        true
    }

    pub fn select_record<V: SearchView + ?Sized>(&mut self, record: HistoryRecord, view: &mut V) {
        if record.value.is_empty() {
            return;
        }

        tracing::info!(value = %record.value, time = %record.time, "suggestion selected");
        view.set_input(&record.value);
        view.clear_suggestions();
        self.history.push(record);
        self.state = InputState::Idle;
        render_history(view, self.history.list());
    }

    pub fn remove_record<V: SearchView + ?Sized>(&mut self, value: &str, view: &mut V) {
        if self.history.remove_record(value) {
            tracing::info!(value, "history record removed");
        }
        render_history(view, self.history.list());
    }

    pub fn clear_history<V: SearchView + ?Sized>(&mut self, view: &mut V) {
        tracing::info!(count = self.history.len(), "history cleared");
        self.history.clear();
        render_history(view, self.history.list());
    }

    /// Explicit input clear. Skips the debounce timer entirely; cancelling a
    /// pending timer is the caller's job.
    pub fn clear_input<V: SearchView + ?Sized>(&mut self, view: &mut V) {
        view.set_input("");
        view.clear_suggestions();
        hide_no_suggestion_indicator(view);
        self.state = InputState::Idle;
    }
}
