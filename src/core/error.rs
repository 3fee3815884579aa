use thiserror::Error;

/// The only failure the suggestion pipeline knows about. Network errors,
/// non-success statuses and undecodable bodies all collapse into it; the
/// reason is kept for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Suggestion fetch failed: {reason}")]
pub struct SuggestionFetchFailed {
    reason: String,
}

impl SuggestionFetchFailed {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<reqwest::Error> for SuggestionFetchFailed {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(format!("request timed out: {err}"))
        } else if err.is_decode() {
            Self::new(format!("invalid response body: {err}"))
        } else {
            Self::new(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid lookup URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error(transparent)]
    Fetch(#[from] SuggestionFetchFailed),
}

pub type Result<T> = std::result::Result<T, SearchError>;
