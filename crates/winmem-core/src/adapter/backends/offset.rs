use std::sync::Arc;

use tracing::{debug, info};

use crate::adapter::traits::GeometryAdapter;
use crate::adapter::types::Capture;
use crate::geometry::{PlatformOffset, WindowRecord};
use crate::host::{HostError, WindowHost};

/// For hosts where set-position excludes window decorations but get-position
/// includes them.
///
/// The offset is learned from the first set-then-get round trip and applied to
/// every later set. It is never persisted, so each process recalibrates once.
#[derive(Debug, Default)]
pub struct OffsetAdapter {
    offset: PlatformOffset,
    last_known_good: Option<WindowRecord>,
}

impl OffsetAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already known offset.
    pub fn with_offset(offset: PlatformOffset) -> Self {
        Self {
            offset,
            last_known_good: None,
        }
    }
}

impl GeometryAdapter for OffsetAdapter {
    fn name(&self) -> &'static str {
        "offset"
    }

    fn restore(
        &mut self,
        host: &Arc<dyn WindowHost>,
        record: &WindowRecord,
    ) -> Result<(), HostError> {
        let (target_x, target_y) = self.offset.compensate(record.x, record.y);
        host.set_position(target_x, target_y)?;
        host.set_size(record.width, record.height)?;

        let (actual_x, actual_y) = host.position()?;
        let measured = PlatformOffset::new(
            actual_x.saturating_sub(target_x),
            actual_y.saturating_sub(target_y),
        );

        if measured != self.offset {
            info!(
                event = "core.adapter.offset_detected",
                previous_dx = self.offset.dx,
                previous_dy = self.offset.dy,
                dx = measured.dx,
                dy = measured.dy
            );
            self.offset = measured;

            let (corrected_x, corrected_y) = self.offset.compensate(record.x, record.y);
            host.set_position(corrected_x, corrected_y)?;
        } else {
            debug!(
                event = "core.adapter.offset_confirmed",
                dx = self.offset.dx,
                dy = self.offset.dy
            );
        }

        self.last_known_good = Some(*record);
        info!(
            event = "core.adapter.restore_completed",
            adapter = self.name(),
            x = record.x,
            y = record.y,
            width = record.width,
            height = record.height
        );
        Ok(())
    }

    fn capture(&mut self, host: &dyn WindowHost) -> Result<Capture, HostError> {
        // get-position already reports frame coordinates, which is what restore expects.
        let (x, y) = host.position()?;
        let (width, height) = host.size()?;
        let capture = Capture::from_native(WindowRecord::new(x, y, width, height));

        match capture {
            Capture::Geometry(record) => self.last_known_good = Some(record),
            Capture::Skip(reason) => debug!(
                event = "core.adapter.capture_skipped",
                adapter = self.name(),
                reason = %reason
            ),
        }
        Ok(capture)
    }

    fn offset(&self) -> PlatformOffset {
        self.offset
    }

    fn last_known_good(&self) -> Option<WindowRecord> {
        self.last_known_good
    }
}
