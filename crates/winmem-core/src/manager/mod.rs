//! Entry points used by the application shell at startup and shutdown.

mod errors;
mod handler;
mod types;

pub use errors::PositionError;
pub use handler::WindowPositionManager;
pub use types::{RestoreOutcome, SaveOutcome};
