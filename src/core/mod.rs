pub mod debounce;
pub mod error;
pub mod history;
pub mod lookup;
pub mod session;
pub mod view;

pub use debounce::Debouncer;
pub use error::{Result, SearchError, SuggestionFetchFailed};
pub use history::{DEFAULT_TIME_FORMAT, HistoryRecord, SearchHistory};
pub use lookup::{CountryLookup, FetchResult, LookupConfig, MockLookup, SuggestionSource};
pub use session::{InputState, SearchSession};
pub use view::{SearchView, render_history, render_suggestions};
