use crate::errors::WinMemError;
use crate::host::HostError;
use crate::persistence::PersistenceError;

#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error(transparent)]
    Host(#[from] HostError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl WinMemError for PositionError {
    fn error_code(&self) -> &'static str {
        match self {
            PositionError::Host(e) => e.error_code(),
            PositionError::Persistence(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            PositionError::Host(e) => e.is_user_error(),
            PositionError::Persistence(e) => e.is_user_error(),
        }
    }
}
