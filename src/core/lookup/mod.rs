mod http;
mod mock;

pub use http::{CountryLookup, DEFAULT_BASE_URL, LookupConfig};
pub use mock::MockLookup;

use crate::core::error::SuggestionFetchFailed;
use async_trait::async_trait;

pub type FetchResult = std::result::Result<Vec<String>, SuggestionFetchFailed>;

/// Anything that can turn a non-empty query into an ordered list of names.
///
/// Callers guarantee `query` is non-empty; an empty input is cleared locally
/// without asking the source.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn fetch_suggestions(&self, query: &str) -> FetchResult;
}
