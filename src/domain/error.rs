use std::io;

use thiserror::Error;

use crate::domain::RecordKind;
use crate::domain::prompt::PromptAssemblyError;

/// Library-wide error type for quakediff operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Room label is not part of the room enumeration.
    #[error("Invalid room '{0}': must be one of Room 1, Room 2, Room 3")]
    InvalidRoom(String),

    /// Crack presence answer is not Yes or No.
    #[error("Invalid crack presence '{0}': must be Yes or No")]
    InvalidCrackPresence(String),

    /// Removal position outside the current list.
    #[error("No {kind} entry at index {index} (list has {len} entries)")]
    IndexOutOfRange { kind: RecordKind, index: usize, len: usize },

    /// Comparison requested while one or both lists are empty.
    #[error(
        "Please submit both Pre-Earthquake and Post-Earthquake data before comparing (missing: {missing})."
    )]
    EmptyDataset { missing: String },

    /// Prompt assembly failed.
    #[error("Prompt assembly failed: {0}")]
    PromptAssembly(#[from] PromptAssemblyError),

    /// The language model call failed. Never retried.
    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    /// Terminal interaction failed.
    #[error("Interaction failed: {0}")]
    Interaction(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::InvalidRoom(_)
            | AppError::InvalidCrackPresence(_)
            | AppError::IndexOutOfRange { .. }
            | AppError::EmptyDataset { .. }
            | AppError::PromptAssembly(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_) => io::ErrorKind::NotFound,
            AppError::ModelInvocation(_) | AppError::Interaction(_) => io::ErrorKind::Other,
        }
    }
}
