//! Vela Navigation
//!
//! Address bar input resolution:
//! 1. No `.` in the input → search with the configured engine template
//! 2. Missing `http://`/`https://` scheme → prefix `http://`
//! 3. Otherwise → navigate to the input as typed
//!
//! Also provides the back/forward history kept by each browsing context.

mod history;
mod input;

pub use history::{HistoryEntry, SessionHistory};
pub use input::{resolve, InputResolution, InputResolver, DEFAULT_SEARCH_ENGINE};
