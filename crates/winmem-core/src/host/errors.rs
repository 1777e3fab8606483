use crate::errors::WinMemError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Window is not available: {message}")]
    WindowUnavailable { message: String },

    #[error("Window host operation '{operation}' failed: {message}")]
    OperationFailed { operation: String, message: String },
}

impl HostError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        HostError::WindowUnavailable {
            message: message.into(),
        }
    }

    pub fn failed(operation: impl Into<String>, message: impl Into<String>) -> Self {
        HostError::OperationFailed {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

impl WinMemError for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            HostError::WindowUnavailable { .. } => "HOST_WINDOW_UNAVAILABLE",
            HostError::OperationFailed { .. } => "HOST_OPERATION_FAILED",
        }
    }
}
