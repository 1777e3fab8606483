use std::sync::Arc;

use tracing::{debug, info, warn};
use winmem_config::{DriftConfig, ProbeConfig};

use crate::adapter::traits::GeometryAdapter;
use crate::adapter::types::{Capture, SkipReason};
use crate::drift;
use crate::geometry::WindowRecord;
use crate::host::{HostError, WindowHost};
use crate::probe::{GeometryProbe, XdotoolProbe};

/// For hosts whose native position query returns the coordinate origin no matter
/// where the window is (GTK under several window managers).
///
/// Saves fall back to an external probe; restores hand verification to the
/// drift monitor instead of reading back immediately.
pub struct FallbackAdapter {
    probe: Arc<dyn GeometryProbe>,
    min_dimension: u32,
    drift: DriftConfig,
    last_known_good: Option<WindowRecord>,
}

impl FallbackAdapter {
    pub fn new(probe: Arc<dyn GeometryProbe>, min_dimension: u32, drift: DriftConfig) -> Self {
        Self {
            probe,
            min_dimension,
            drift,
            last_known_good: None,
        }
    }

    pub fn from_config(probe: &ProbeConfig, drift: &DriftConfig) -> Self {
        Self::new(
            Arc::new(XdotoolProbe::from_config(probe)),
            probe.min_dimension,
            drift.clone(),
        )
    }

    fn probe_geometry(&self) -> Option<WindowRecord> {
        match self.probe.query() {
            Ok(report) => report.accept(self.min_dimension),
            Err(e) => {
                warn!(
                    event = "core.adapter.probe_failed",
                    probe = self.probe.name(),
                    error = %e,
                    hint = "install xdotool for window position tracking on X11"
                );
                None
            }
        }
    }
}

impl GeometryAdapter for FallbackAdapter {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn restore(
        &mut self,
        host: &Arc<dyn WindowHost>,
        record: &WindowRecord,
    ) -> Result<(), HostError> {
        // GTK applies position relative to the current size, so size goes first.
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

        if self.drift.enabled {
            match drift::spawn(
                Arc::clone(host),
                Arc::clone(&self.probe),
                *record,
                self.drift.clone(),
                self.min_dimension,
            ) {
                Ok(_detached) => debug!(event = "core.adapter.drift_monitor_spawned"),
                Err(e) => warn!(event = "core.adapter.drift_monitor_failed", error = %e),
            }
        }
        Ok(())
    }

    fn capture(&mut self, host: &dyn WindowHost) -> Result<Capture, HostError> {
        let (x, y) = host.position()?;
        let (width, height) = host.size()?;

        let record = if (x, y) == (0, 0) {
            debug!(
                event = "core.adapter.native_origin",
                adapter = self.name(),
                probe = self.probe.name()
            );
            match self.probe_geometry() {
                Some(record) => record,
                None => {
                    debug!(
                        event = "core.adapter.capture_skipped",
                        adapter = self.name(),
                        reason = %SkipReason::NoUsableGeometry
                    );
                    return Ok(Capture::Skip(SkipReason::NoUsableGeometry));
                }
            }
        } else {
            WindowRecord::new(x, y, width, height)
        };

        let capture = Capture::from_native(record);
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
