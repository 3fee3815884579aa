use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use super::{FetchResult, SuggestionSource};
use crate::core::error::SuggestionFetchFailed;

/// Scripted [`SuggestionSource`]: replays queued results in order and records
/// every query it was asked for.
#[derive(Clone, Default)]
pub struct MockLookup {
    responses: Arc<Mutex<VecDeque<FetchResult>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.responses
            .lock()
            .push_back(Ok(names.into_iter().map(Into::into).collect()));
        self
    }

    #[must_use]
    pub fn with_failure(self, reason: impl Into<String>) -> Self {
        self.responses
            .lock()
            .push_back(Err(SuggestionFetchFailed::new(reason)));
        self
    }

    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }

    #[must_use]
    pub fn query_count(&self) -> usize {
        self.queries.lock().len()
    }
}

#[async_trait]
impl SuggestionSource for MockLookup {
    async fn fetch_suggestions(&self, query: &str) -> FetchResult {
        self.queries.lock().push(query.to_string());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(SuggestionFetchFailed::new("no scripted response")))
    }
}
