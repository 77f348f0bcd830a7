//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Tab index {index} out of range ({len} open)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No tab is open")]
    NoCurrentTab,

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}
