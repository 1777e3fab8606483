//! Windowing host trait definition.

use super::errors::HostError;
use crate::geometry::ScreenBounds;

/// Geometry operations the GUI toolkit provides for one window.
///
/// Coordinates are screen pixels. How trustworthy each call is depends on the
/// platform; the adapters in `crate::adapter` compensate for that.
pub trait WindowHost: Send + Sync {
    /// Current window position as reported by the toolkit.
    fn position(&self) -> Result<(i32, i32), HostError>;

    fn set_position(&self, x: i32, y: i32) -> Result<(), HostError>;

    /// Current window size as reported by the toolkit.
    fn size(&self) -> Result<(u32, u32), HostError>;

    fn set_size(&self, width: u32, height: u32) -> Result<(), HostError>;

    /// Work areas of all monitors; the first entry is the reference monitor.
    fn screens(&self) -> Result<Vec<ScreenBounds>, HostError>;
}
