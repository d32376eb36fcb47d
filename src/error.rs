use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("Storage error: {0}")]
    Storage(#[from] rocksdb::Error),
    #[error("Payment provider error ({status}): {message}")]
    Payment { status: u16, message: String },
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Action already registered: {0}")]
    DuplicateAction(String),
    #[error("Input closed")]
    InputClosed,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, AdminError>;
