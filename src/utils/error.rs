// src/utils/error.rs
use thiserror::Error;

// The extraction engine itself has no error channel; these cover the I/O around it.

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Could not read analysis input: {0}")]
    Input(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
