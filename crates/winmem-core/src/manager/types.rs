use crate::adapter::SkipReason;
use crate::geometry::WindowRecord;

/// What `save_position` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was merged into the shared file under this window's identity.
    Saved(WindowRecord),
    /// Nothing was written.
    Skipped(SkipReason),
}

/// What `restore_position` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// `requested` is the stored record; `applied` is the same record after
    /// bounds correction, as handed to the adapter.
    Applied {
        requested: WindowRecord,
        applied: WindowRecord,
    },
    /// No usable record for this identity; the window keeps its default geometry.
    NoSavedState,
}
