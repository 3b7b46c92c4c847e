use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing or empty environment variable(s): {}", .missing.join(", "))]
    MissingCredentials { missing: Vec<&'static str> },
    #[error("Failed to read {}: {reason}", .path.display())]
    StoreRead { path: PathBuf, reason: String },
    #[error("Failed to write {}", .path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize admin store")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn code(&self) -> String {
        match self {
            AppError::MissingCredentials { missing: _ } => String::from("MissingCredentials"),
            AppError::StoreRead { path: _, reason: _ } => String::from("StoreReadError"),
            AppError::StoreWrite { path: _, source: _ } => String::from("UnexpectedError"),
            AppError::Serialize(_) => String::from("UnexpectedError"),
        }
    }

    pub fn is_unexpected(&self) -> bool {
        matches!(self, AppError::StoreWrite { .. } | AppError::Serialize(_))
    }
}
