use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;

use super::{FetchResult, SuggestionSource};
use crate::core::error::{Result, SearchError, SuggestionFetchFailed};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v2/name";

#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: Some(format!("country-search/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl LookupConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// One element of the lookup service's JSON array. Only `name` matters.
#[derive(Debug, Clone, Deserialize)]
struct CountryRecord {
    name: String,
}

/// Fetches suggestions with `GET {base_url}/{query}`.
#[derive(Clone)]
pub struct CountryLookup {
    client: Client,
    base_url: Url,
}

impl CountryLookup {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| SearchError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(SearchError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(ref ua) = config.user_agent {
            builder = builder.user_agent(ua);
        }

        let client = builder
            .build()
            .map_err(|e| SearchError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// The request URL for `query`, with the query percent-encoded as a
    /// single trailing path segment.
    #[must_use]
    pub fn url_for(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(query);
        }
        url
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl SuggestionSource for CountryLookup {
    async fn fetch_suggestions(&self, query: &str) -> FetchResult {
        let url = self.url_for(query);
        tracing::debug!(%url, "fetching suggestions");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SuggestionFetchFailed::new(format!("HTTP {}", status.as_u16())));
        }

        let records: Vec<CountryRecord> = response.json().await?;
        Ok(records.into_iter().map(|r| r.name).collect())
    }
}

impl std::fmt::Debug for CountryLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryLookup")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
