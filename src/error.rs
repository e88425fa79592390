use std::path::PathBuf;

use thiserror::Error;

/// Every variant ends the run. Nothing is written when one is returned.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("dataset not found: {}", .path.display())]
    DatasetNotFound { path: PathBuf },

    #[error("failed to read dataset {}: {message}", .path.display())]
    DatasetRead { path: PathBuf, message: String },

    #[error(
        "missing required columns: {} (available columns: {})",
        .missing.join(", "),
        .available.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("failed to write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
