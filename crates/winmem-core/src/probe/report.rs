use tracing::debug;

use crate::geometry::WindowRecord;

/// Values parsed from a `KEY=VALUE` geometry report.
///
/// ```text
/// WINDOW=123456
/// X=100
/// Y=200
/// WIDTH=800
/// HEIGHT=600
/// SCREEN=0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

impl ProbeReport {
    /// Geometry only when both dimensions are present and strictly larger than
    /// `min_dimension`. Tiny reports come from windows mid-teardown.
    /// A missing X or Y is taken as 0, which is a legitimate screen edge.
    pub fn accept(&self, min_dimension: u32) -> Option<WindowRecord> {
        let min = i64::from(min_dimension);
        match (self.width, self.height) {
            (Some(width), Some(height)) if width > min && height > min => Some(WindowRecord::new(
                self.x.unwrap_or(0),
                self.y.unwrap_or(0),
                u32::try_from(width).ok()?,
                u32::try_from(height).ok()?,
            )),
            _ => {
                debug!(
                    event = "core.probe.report_rejected",
                    width = ?self.width,
                    height = ?self.height,
                    min_dimension = min_dimension
                );
                None
            }
        }
    }
}

/// Parse a line-oriented `KEY=VALUE` report.
///
/// Blank lines, unknown keys, and lines that fail to parse are skipped.
pub fn parse_probe_report(output: &str) -> ProbeReport {
    let mut report = ProbeReport::default();

    for line in output.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some((key, value)) = line.split_once('=') else {
            debug!(
                event = "core.probe.line_skipped",
                line = line,
                reason = "no separator"
            );
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        let Ok(parsed) = value.parse::<i64>() else {
            debug!(
                event = "core.probe.line_skipped",
                line = line,
                reason = "not a number"
            );
            continue;
        };

        match key {
            "X" => report.x = i32::try_from(parsed).ok(),
            "Y" => report.y = i32::try_from(parsed).ok(),
            "WIDTH" => report.width = Some(parsed),
            "HEIGHT" => report.height = Some(parsed),
            _ => {}
        }
    }

    report
}
