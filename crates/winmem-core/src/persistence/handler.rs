use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::{debug, info};
use winmem_config::LockConfig;

use super::errors::PersistenceError;
use super::lock::{LockMode, LockedFile, lock_with_retry};
use crate::geometry::WindowRecord;

pub type Records = BTreeMap<String, WindowRecord>;

/// Read the shared geometry file under a shared lock.
///
/// Returns `Ok(None)` when the file does not exist yet (first run).
/// The parent directory is created either way so load and save stay symmetric.
pub fn read_records(path: &Path, policy: &LockConfig) -> Result<Option<Records>, PersistenceError> {
    debug!(event = "core.persistence.load_started", path = %path.display());

    ensure_parent_dir(path)?;

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(
                event = "core.persistence.load_skipped",
                path = %path.display(),
                reason = "file not found"
            );
            return Ok(None);
        }
        Err(e) => {
            return Err(PersistenceError::OpenFailed {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let locked = lock_with_retry(file, path, LockMode::Shared, policy)?;
    let records = read_locked(&locked, path)?;

    info!(
        event = "core.persistence.load_completed",
        path = %path.display(),
        count = records.len()
    );
    Ok(Some(records))
}

/// Overwrite the shared geometry file with `records` under an exclusive lock.
pub fn write_records(
    path: &Path,
    records: &Records,
    policy: &LockConfig,
) -> Result<(), PersistenceError> {
    let locked = open_locked_for_write(path, policy)?;
    write_locked(&locked, path, records)?;

    info!(
        event = "core.persistence.save_completed",
        path = %path.display(),
        count = records.len()
    );
    Ok(())
}

/// Reload, modify, and write back the shared file while holding one exclusive lock.
///
/// Keys written by sibling processes since our last load survive because `update`
/// sees the on-disk mapping, not our stale copy. Returns the mapping as written.
pub fn update_records<F>(
    path: &Path,
    policy: &LockConfig,
    update: F,
) -> Result<Records, PersistenceError>
where
    F: FnOnce(&mut Records),
{
    let locked = open_locked_for_write(path, policy)?;
    let mut records = read_locked(&locked, path)?;
    let before = records.len();

    update(&mut records);
    write_locked(&locked, path, &records)?;

    info!(
        event = "core.persistence.merge_completed",
        path = %path.display(),
        reloaded = before,
        count = records.len()
    );
    Ok(records)
}

fn ensure_parent_dir(path: &Path) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PersistenceError::CreateDirFailed {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Open (creating if needed) and exclusively lock the file, retrying the whole
/// open+lock step `policy.open_attempts` times.
///
/// The file is never truncated on open: truncation happens in `write_locked`,
/// after the lock is held.
fn open_locked_for_write(path: &Path, policy: &LockConfig) -> Result<LockedFile, PersistenceError> {
    ensure_parent_dir(path)?;

    let attempts = policy.open_attempts.max(1);
    let mut attempt = 1;

    loop {
        let result = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| PersistenceError::OpenFailed {
                path: path.to_path_buf(),
                source: e,
            })
            .and_then(|file| lock_with_retry(file, path, LockMode::Exclusive, policy));

        match result {
            Ok(locked) => return Ok(locked),
            Err(e) if attempt < attempts => {
                debug!(
                    event = "core.persistence.open_retry",
                    path = %path.display(),
                    attempt = attempt,
                    error = %e
                );
                attempt += 1;
                std::thread::sleep(policy.open_interval());
            }
            Err(e) => return Err(e),
        }
    }
}

fn read_locked(locked: &LockedFile, path: &Path) -> Result<Records, PersistenceError> {
    let mut handle = locked.file();
    let mut content = String::new();
    handle
        .seek(SeekFrom::Start(0))
        .and_then(|_| handle.read_to_string(&mut content))
        .map_err(|e| PersistenceError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    parse_records(path, &content)
}

/// Blank content means a previous writer died between truncating and writing
/// (both happen under the exclusive lock), so it loads as an empty mapping.
/// Anything else that fails to parse is surfaced.
fn parse_records(path: &Path, content: &str) -> Result<Records, PersistenceError> {
    if content.trim().is_empty() {
        return Ok(Records::new());
    }
    serde_json::from_str(content).map_err(|e| PersistenceError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_locked(
    locked: &LockedFile,
    path: &Path,
    records: &Records,
) -> Result<(), PersistenceError> {
    let data = serialize_records(records)?;
    let mut handle = locked.file();
    let write_failed = |e| PersistenceError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    handle.set_len(0).map_err(write_failed)?;
    handle.seek(SeekFrom::Start(0)).map_err(write_failed)?;
    handle.write_all(&data).map_err(write_failed)?;
    handle.sync_all().map_err(write_failed)?;
    Ok(())
}

/// Serialize only valid records; zero-sized geometry is never persisted.
fn serialize_records(records: &Records) -> Result<Vec<u8>, PersistenceError> {
    let valid: BTreeMap<&str, &WindowRecord> = records
        .iter()
        .filter(|(_, record)| record.is_valid())
        .map(|(id, record)| (id.as_str(), record))
        .collect();

    let dropped = records.len() - valid.len();
    if dropped > 0 {
        debug!(
            event = "core.persistence.invalid_records_dropped",
            count = dropped
        );
    }

    serde_json::to_vec(&valid).map_err(|source| PersistenceError::SerializeFailed { source })
}
