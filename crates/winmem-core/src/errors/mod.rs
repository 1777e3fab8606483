use std::error::Error;

/// Base trait for all window memory errors
pub trait WinMemError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the library
pub type WinMemResult<T> = Result<T, Box<dyn WinMemError>>;

impl WinMemError for winmem_config::ConfigError {
    fn error_code(&self) -> &'static str {
        winmem_config::ConfigError::error_code(self)
    }

    fn is_user_error(&self) -> bool {
        winmem_config::ConfigError::is_user_error(self)
    }
}
