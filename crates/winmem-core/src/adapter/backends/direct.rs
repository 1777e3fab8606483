use std::sync::Arc;

use tracing::{debug, info};

use crate::adapter::traits::GeometryAdapter;
use crate::adapter::types::Capture;
use crate::geometry::WindowRecord;
use crate::host::{HostError, WindowHost};

/// For hosts whose native get/set calls can be trusted as-is.
#[derive(Debug, Default)]
pub struct DirectAdapter {
    last_known_good: Option<WindowRecord>,
}

impl DirectAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeometryAdapter for DirectAdapter {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn restore(
        &mut self,
        host: &Arc<dyn WindowHost>,
        record: &WindowRecord,
    ) -> Result<(), HostError> {
        host.set_size(record.width, record.height)?;
        host.set_position(record.x, record.y)?;
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

    fn last_known_good(&self) -> Option<WindowRecord> {
        self.last_known_good
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::types::SkipReason;
    use crate::host::testing::{HostCall, SimulatedHost};

    #[test]
    fn test_restore_sets_size_then_position() {
        let sim = Arc::new(SimulatedHost::new(0, 0, 1024, 768));
        let host: Arc<dyn WindowHost> = sim.clone();
        let mut adapter = DirectAdapter::new();

        adapter
            .restore(&host, &WindowRecord::new(120, 80, 800, 600))
            .unwrap();

        assert_eq!(
            sim.calls(),
            vec![HostCall::SetSize(800, 600), HostCall::SetPosition(120, 80)]
        );
        assert_eq!(sim.current(), WindowRecord::new(120, 80, 800, 600));
        assert_eq!(
            adapter.last_known_good(),
            Some(WindowRecord::new(120, 80, 800, 600))
        );
    }

    #[test]
    fn test_capture_reads_native_geometry() {
        let sim = SimulatedHost::new(-40, 12, 900, 700);
        let mut adapter = DirectAdapter::new();

        let capture = adapter.capture(&sim).unwrap();

        assert_eq!(
            capture,
            Capture::Geometry(WindowRecord::new(-40, 12, 900, 700))
        );
        assert!(adapter.offset().is_zero());
    }

    #[test]
    fn test_capture_skips_zero_height() {
        let sim = SimulatedHost::new(10, 10, 800, 0);
        let mut adapter = DirectAdapter::new();

        let capture = adapter.capture(&sim).unwrap();

        assert_eq!(capture, Capture::Skip(SkipReason::InvalidDimensions));
        assert_eq!(adapter.last_known_good(), None);
    }

    #[test]
    fn test_capture_propagates_host_failure() {
        let sim = SimulatedHost::new(10, 10, 800, 600).failing();
        let mut adapter = DirectAdapter::new();

        assert!(adapter.capture(&sim).is_err());
    }
}
