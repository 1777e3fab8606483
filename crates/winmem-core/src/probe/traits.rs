//! Geometry probe trait definition.

use super::errors::ProbeError;
use super::report::ProbeReport;

/// A secondary, out-of-process source of window geometry.
///
/// Consulted when the toolkit's own query is known to misreport (e.g. always
/// answering the coordinate origin).
pub trait GeometryProbe: Send + Sync {
    /// The canonical name of this probe (e.g., "xdotool").
    fn name(&self) -> &'static str;

    /// Check if the probe tool is installed and available in PATH.
    fn is_available(&self) -> bool;

    /// Query the window's geometry. Plausibility is checked by the caller.
    fn query(&self) -> Result<ProbeReport, ProbeError>;
}
