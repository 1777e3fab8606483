mod errors;
mod report;
mod traits;
mod xdotool;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use errors::ProbeError;
pub use report::{ProbeReport, parse_probe_report};
pub use traits::GeometryProbe;
pub use xdotool::XdotoolProbe;
