use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Setup required: {detail}")]
    SetupRequired { detail: String },
    #[error("Storage error: {detail}")]
    Storage { detail: String },
    #[error("Serialization error: {detail}")]
    Serialization { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable error code for any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(err) => err.code(),
            AppError::SetupRequired { .. } => ErrorCode::SetupRequired,
            AppError::Storage { .. } => ErrorCode::StorageError,
            AppError::Serialization { .. } => ErrorCode::SerializationError,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn setup_required(detail: impl Into<String>) -> Self {
        Self::SetupRequired {
            detail: detail.into(),
        }
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::storage(format!("io error: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization {
            detail: e.to_string(),
        }
    }
}
