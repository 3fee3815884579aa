mod header;
mod history;
mod status;
mod suggestions;

pub use header::render_header;
pub use history::render_history;
pub use status::{StatusInfo, render_status};
pub use suggestions::render_suggestions;
