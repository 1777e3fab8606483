use crate::geometry::WindowRecord;

/// Why a save did not write anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The host reported a zero width or height, typically during teardown.
    InvalidDimensions,
    /// Neither the native query nor the external probe gave plausible geometry.
    NoUsableGeometry,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::InvalidDimensions => "invalid_dimensions",
            SkipReason::NoUsableGeometry => "no_usable_geometry",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of reading live geometry from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Geometry(WindowRecord),
    Skip(SkipReason),
}

impl Capture {
    /// Zero-sized geometry is never worth persisting.
    pub(crate) fn from_native(record: WindowRecord) -> Self {
        if record.is_valid() {
            Capture::Geometry(record)
        } else {
            Capture::Skip(SkipReason::InvalidDimensions)
        }
    }
}
