use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};
use winmem_config::DriftConfig;

use crate::geometry::WindowRecord;
use crate::host::WindowHost;
use crate::probe::GeometryProbe;

/// Best available geometry for the window right now.
///
/// Native query first; when it fails or answers the coordinate origin, the probe.
pub fn measure(
    host: &dyn WindowHost,
    probe: &dyn GeometryProbe,
    min_dimension: u32,
) -> Option<WindowRecord> {
    if let (Ok((x, y)), Ok((width, height))) = (host.position(), host.size())
        && (x, y) != (0, 0)
    {
        let record = WindowRecord::new(x, y, width, height);
        if record.is_valid() {
            return Some(record);
        }
    }

    match probe.query() {
        Ok(report) => report.accept(min_dimension),
        Err(e) => {
            debug!(event = "core.drift.probe_failed", probe = probe.name(), error = %e);
            None
        }
    }
}

/// Watch a freshly placed window and put it back if the window manager moves it.
///
/// Fire-and-forget: the returned handle may be dropped. The thread waits at most
/// `appear_polls` intervals for the window to become measurable, then re-measures
/// for `settle_polls` intervals, re-issuing size and position whenever the window
/// is not where `target` says. It then exits whether or not the window settled.
pub fn spawn(
    host: Arc<dyn WindowHost>,
    probe: Arc<dyn GeometryProbe>,
    target: WindowRecord,
    config: DriftConfig,
    min_dimension: u32,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("winmem-drift".to_string())
        .spawn(move || watch(&*host, &*probe, target, &config, min_dimension))
}

fn watch(
    host: &dyn WindowHost,
    probe: &dyn GeometryProbe,
    target: WindowRecord,
    config: &DriftConfig,
    min_dimension: u32,
) {
    let interval = config.poll_interval();
    info!(
        event = "core.drift.watch_started",
        x = target.x,
        y = target.y,
        appear_polls = config.appear_polls(),
        settle_polls = config.settle_polls()
    );

    let mut appeared = false;
    for poll in 0..config.appear_polls() {
        if measure(host, probe, min_dimension).is_some() {
            debug!(event = "core.drift.window_appeared", poll = poll);
            appeared = true;
            break;
        }
        thread::sleep(interval);
    }

    if !appeared {
        warn!(
            event = "core.drift.watch_abandoned",
            reason = "window never became measurable"
        );
        return;
    }

    let mut corrections = 0u64;
    for poll in 0..config.settle_polls() {
        if let Some(measured) = measure(host, probe, min_dimension)
            && measured.position() != target.position()
        {
            info!(
                event = "core.drift.corrected",
                poll = poll,
                measured_x = measured.x,
                measured_y = measured.y,
                target_x = target.x,
                target_y = target.y
            );
            let reapplied = host
                .set_size(target.width, target.height)
                .and_then(|()| host.set_position(target.x, target.y));
            if let Err(e) = reapplied {
                warn!(event = "core.drift.correction_failed", error = %e);
            }
            corrections += 1;
        }
        thread::sleep(interval);
    }

    info!(
        event = "core.drift.watch_completed",
        corrections = corrections
    );
}
