//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] vela_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] vela_tabs::TabError),

    #[error("Privacy error: {0}")]
    Privacy(#[from] vela_privacy::PrivacyError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
