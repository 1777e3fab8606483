use std::path::PathBuf;

use crate::errors::WinMemError;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to open geometry file '{}': {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Geometry file '{}' still locked after {attempts} attempts: {source}", .path.display())]
    LockContention {
        path: PathBuf,
        attempts: u32,
        source: std::io::Error,
    },

    #[error("Failed to read geometry file '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write geometry file '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Geometry file '{}' contains invalid JSON: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize window geometry: {source}")]
    SerializeFailed { source: serde_json::Error },
}

impl WinMemError for PersistenceError {
    fn error_code(&self) -> &'static str {
        match self {
            PersistenceError::CreateDirFailed { .. } => "PERSISTENCE_CREATE_DIR_FAILED",
            PersistenceError::OpenFailed { .. } => "PERSISTENCE_OPEN_FAILED",
            PersistenceError::LockContention { .. } => "PERSISTENCE_LOCK_CONTENTION",
            PersistenceError::ReadFailed { .. } => "PERSISTENCE_READ_FAILED",
            PersistenceError::WriteFailed { .. } => "PERSISTENCE_WRITE_FAILED",
            PersistenceError::Malformed { .. } => "PERSISTENCE_MALFORMED",
            PersistenceError::SerializeFailed { .. } => "PERSISTENCE_SERIALIZE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, PersistenceError::Malformed { .. })
    }
}
