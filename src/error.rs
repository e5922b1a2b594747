// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fixture file not found: {}", .path.display())]
    FixtureNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Response from {endpoint} was not valid JSON")]
    InvalidResponseBody {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write report to {}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] std::env::VarError),
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;
