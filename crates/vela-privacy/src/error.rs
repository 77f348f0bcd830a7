//! Privacy error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrivacyError {
    /// A filter pattern failed to compile. Raised when the rule set is
    /// built, never while a request is being checked.
    #[error("Invalid filter pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
