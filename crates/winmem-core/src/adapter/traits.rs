//! Platform geometry adapter trait definition.

use std::sync::Arc;

use super::types::Capture;
use crate::geometry::{PlatformOffset, WindowRecord};
use crate::host::{HostError, WindowHost};

/// Per-platform strategy for applying and reading back window geometry.
///
/// One adapter instance lives for the whole process and carries whatever the
/// platform needs to remember between calls (decoration offset, last good read).
pub trait GeometryAdapter: Send {
    /// The canonical name of this adapter (e.g., "direct", "offset").
    fn name(&self) -> &'static str;

    /// Apply `record` to the window. Coordinates are already bounds-corrected.
    fn restore(
        &mut self,
        host: &Arc<dyn WindowHost>,
        record: &WindowRecord,
    ) -> Result<(), HostError>;

    /// Read the window's current geometry, or the reason there is nothing to save.
    fn capture(&mut self, host: &dyn WindowHost) -> Result<Capture, HostError>;

    /// Decoration offset learned so far. Zero for adapters that never compensate.
    fn offset(&self) -> PlatformOffset {
        PlatformOffset::default()
    }

    /// Most recent geometry this adapter applied or captured successfully.
    fn last_known_good(&self) -> Option<WindowRecord>;
}
