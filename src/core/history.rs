use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// Equivalent of `YYYY-MM-DD hh:mm A`.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Whether chrono accepts every specifier in `format`.
#[must_use]
pub fn is_valid_time_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub value: String,
    pub time: String,
}

impl HistoryRecord {
    #[must_use]
    pub fn new(value: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            time: time.into(),
        }
    }

    /// A record stamped with `at`, rendered through a strftime `format`.
    /// An unusable `format` falls back to [`DEFAULT_TIME_FORMAT`].
    #[must_use]
    pub fn stamped<Tz>(value: impl Into<String>, at: &DateTime<Tz>, format: &str) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut time = String::new();
        if !is_valid_time_format(format) || write!(time, "{}", at.format(format)).is_err() {
            tracing::warn!(format, "invalid time format, using default");
            time.clear();
            let _ = write!(time, "{}", at.format(DEFAULT_TIME_FORMAT));
        }
        Self::new(value, time)
    }

    #[must_use]
    pub fn now(value: impl Into<String>, format: &str) -> Self {
        Self::stamped(value, &Local::now(), format)
    }
}

/// Selections in the order they were made. Duplicates are allowed; removal by
/// value takes the earliest match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    records: Vec<HistoryRecord>,
}

impl SearchHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Callers must not pass an empty `value`.
    pub fn add_record(&mut self, value: impl Into<String>, time: impl Into<String>) {
        self.push(HistoryRecord::new(value, time));
    }

    pub fn push(&mut self, record: HistoryRecord) {
        debug_assert!(!record.value.is_empty());
        self.records.push(record);
    }

    /// Returns whether a record was removed.
    pub fn remove_record(&mut self, value: &str) -> bool {
        match self.records.iter().position(|r| r.value == value) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
