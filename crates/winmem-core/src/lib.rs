//! Window memory: per-window screen geometry, remembered across launches and
//! shared safely between concurrently running launcher instances.
//!
//! The application shell supplies a [`WindowHost`] for its window and drives a
//! [`WindowPositionManager`]: `load` + `restore_position` at startup,
//! `save_position` (or `save_position_best_effort`) at shutdown.

pub mod adapter;
pub mod drift;
pub mod errors;
pub mod geometry;
pub mod host;
pub mod identity;
mod logging;
pub mod manager;
pub mod persistence;
pub mod probe;

pub use adapter::{Capture, GeometryAdapter, SkipReason, adapter_for, create_adapter};
pub use errors::{WinMemError, WinMemResult};
pub use geometry::{GeometryStore, PlatformOffset, ScreenBounds, WindowRecord, correct_position};
pub use host::{HostError, WindowHost};
pub use identity::{Service, window_identity};
pub use logging::{LOG_FORMAT_ENV, init_logging};
pub use manager::{PositionError, RestoreOutcome, SaveOutcome, WindowPositionManager};
pub use persistence::PersistenceError;
pub use probe::{GeometryProbe, ProbeError, ProbeReport, XdotoolProbe};
pub use winmem_config::WinMemConfig;
