use std::time::Duration;

use crate::errors::WinMemError;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Geometry probe not found: {tool}")]
    ToolNotFound { tool: String },

    #[error("Failed to run geometry probe '{tool}': {source}")]
    ExecFailed {
        tool: String,
        source: std::io::Error,
    },

    #[error("Geometry probe '{tool}' failed: {message}")]
    CommandFailed { tool: String, message: String },

    #[error("Geometry probe '{tool}' did not exit within {timeout:?}")]
    TimedOut { tool: String, timeout: Duration },
}

impl WinMemError for ProbeError {
    fn error_code(&self) -> &'static str {
        match self {
            ProbeError::ToolNotFound { .. } => "PROBE_TOOL_NOT_FOUND",
            ProbeError::ExecFailed { .. } => "PROBE_EXEC_FAILED",
            ProbeError::CommandFailed { .. } => "PROBE_COMMAND_FAILED",
            ProbeError::TimedOut { .. } => "PROBE_TIMED_OUT",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProbeError::ToolNotFound { .. })
    }
}
