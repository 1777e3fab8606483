use std::collections::BTreeMap;
use std::path::Path;

use winmem_config::LockConfig;

use super::types::WindowRecord;
use crate::persistence::{self, PersistenceError};

/// In-memory mapping from window identity (usually the window title) to geometry.
///
/// Each process holds its own copy; the shared file is reconciled on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeometryStore {
    records: BTreeMap<String, WindowRecord>,
}

impl GeometryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<WindowRecord> {
        self.records.get(id).copied()
    }

    /// Upsert in memory only.
    pub fn set(&mut self, id: impl Into<String>, record: WindowRecord) {
        self.records.insert(id.into(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn records(&self) -> &BTreeMap<String, WindowRecord> {
        &self.records
    }

    pub(crate) fn replace(&mut self, records: BTreeMap<String, WindowRecord>) {
        self.records = records;
    }

    /// Replace the contents with the file at `path` under a shared lock.
    ///
    /// A missing file leaves the store untouched.
    pub fn load_from(&mut self, path: &Path, policy: &LockConfig) -> Result<(), PersistenceError> {
        if let Some(records) = persistence::read_records(path, policy)? {
            self.replace(records);
        }
        Ok(())
    }

    /// Write the full mapping to `path` under an exclusive lock.
    pub fn save_to(&self, path: &Path, policy: &LockConfig) -> Result<(), PersistenceError> {
        persistence::write_records(path, &self.records, policy)
    }
}

impl FromIterator<(String, WindowRecord)> for GeometryStore {
    fn from_iter<I: IntoIterator<Item = (String, WindowRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
