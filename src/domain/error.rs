use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for fossa operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// An explicitly requested config file does not exist.
    #[error("Invalid config file specified: {} does not exist", .0.display())]
    InvalidConfigPath(PathBuf),

    /// `init` found a config file and was not asked to overwrite it.
    #[error("Config file already exists: {}. Use --overwrite to replace it.", .0.display())]
    ConfigExists(PathBuf),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The config document could not be decoded.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The config document could not be encoded.
    #[error("Failed to serialize config: {0}")]
    Serialization(#[source] serde_yaml::Error),

    /// JSON rendering failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Git inspection failed.
    #[error("Git error running '{command}': {details}")]
    Git { command: String, details: String },
}

impl AppError {
    pub(crate) fn git<C: Into<String>>(command: C, err: git2::Error) -> Self {
        AppError::Git { command: command.into(), details: err.message().to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidConfigPath(_) => io::ErrorKind::NotFound,
            AppError::ConfigExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Parse { .. } => io::ErrorKind::InvalidData,
            AppError::Serialization(_) | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::Git { .. } => io::ErrorKind::Other,
        }
    }
}
