use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};
use winmem_config::{WinMemConfig, geometry_file_path};

use super::errors::PositionError;
use super::types::{RestoreOutcome, SaveOutcome};
use crate::adapter::{Capture, GeometryAdapter, adapter_for};
use crate::errors::WinMemError;
use crate::geometry::{GeometryStore, PlatformOffset, ScreenBounds, WindowRecord, correct_position};
use crate::host::WindowHost;
use crate::persistence::{PersistenceError, update_records};

/// Remembers and restores window geometry for one launcher process.
///
/// Holds this process's copy of the geometry mapping. The file on disk stays the
/// authority: every save reloads it, changes only the saving window's key, and
/// writes it back under an exclusive lock.
pub struct WindowPositionManager {
    store: Mutex<GeometryStore>,
    adapter: Mutex<Box<dyn GeometryAdapter>>,
    host: Arc<dyn WindowHost>,
    config: WinMemConfig,
}

impl WindowPositionManager {
    /// Manager using the adapter named in `config.adapter.variant`.
    pub fn new(host: Arc<dyn WindowHost>, config: WinMemConfig) -> Self {
        let adapter = adapter_for(&config);
        Self::with_adapter(host, config, adapter)
    }

    pub fn with_adapter(
        host: Arc<dyn WindowHost>,
        config: WinMemConfig,
        adapter: Box<dyn GeometryAdapter>,
    ) -> Self {
        debug!(
            event = "core.manager.created",
            adapter = adapter.name(),
            min_visible_offset = config.bounds.min_visible_offset
        );
        Self {
            store: Mutex::new(GeometryStore::new()),
            adapter: Mutex::new(adapter),
            host,
            config,
        }
    }

    /// Geometry file this manager's configuration points at.
    pub fn storage_path(&self) -> PathBuf {
        geometry_file_path(&self.config)
    }

    /// Replace the in-memory mapping with the file's contents.
    ///
    /// A missing file leaves the mapping unchanged.
    pub fn load(&self, path: &Path) -> Result<(), PersistenceError> {
        self.store().load_from(path, &self.config.lock)
    }

    /// Write the whole in-memory mapping to `path`.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        self.store().save_to(path, &self.config.lock)
    }

    pub fn get(&self, id: &str) -> Option<WindowRecord> {
        self.store().get(id)
    }

    /// In-memory override; nothing is written until the next save.
    pub fn set(&self, id: &str, record: WindowRecord) {
        self.store().set(id, record);
    }

    /// Decoration offset learned by the active adapter.
    pub fn offset(&self) -> PlatformOffset {
        self.adapter().offset()
    }

    pub fn last_known_good(&self) -> Option<WindowRecord> {
        self.adapter().last_known_good()
    }

    /// Move the window to its remembered geometry, kept on-screen.
    pub fn restore_position(&self, id: &str) -> Result<RestoreOutcome, PositionError> {
        let Some(requested) = self.get(id).filter(WindowRecord::is_valid) else {
            info!(
                event = "core.manager.restore_skipped",
                window = id,
                reason = "no saved state"
            );
            return Ok(RestoreOutcome::NoSavedState);
        };

        info!(
            event = "core.manager.restore_started",
            window = id,
            x = requested.x,
            y = requested.y,
            width = requested.width,
            height = requested.height
        );

        let applied = match self.reference_screen() {
            Some(screen) => {
                let (x, y) =
                    correct_position(&requested, &screen, self.config.bounds.min_visible_offset);
                requested.with_position(x, y)
            }
            None => requested,
        };

        self.adapter().restore(&self.host, &applied)?;

        info!(
            event = "core.manager.restore_completed",
            window = id,
            x = applied.x,
            y = applied.y
        );
        Ok(RestoreOutcome::Applied { requested, applied })
    }

    /// Read the window's live geometry and merge it into the shared file.
    ///
    /// Keys written by sibling processes are preserved. Unusable live geometry
    /// is a skip, not an error.
    pub fn save_position(&self, id: &str, path: &Path) -> Result<SaveOutcome, PositionError> {
        debug!(event = "core.manager.save_started", window = id, path = %path.display());

        let capture = self.adapter().capture(self.host.as_ref())?;
        let record = match capture {
            Capture::Geometry(record) => record,
            Capture::Skip(reason) => {
                info!(event = "core.manager.save_skipped", window = id, reason = %reason);
                return Ok(SaveOutcome::Skipped(reason));
            }
        };

        let merged = update_records(path, &self.config.lock, |records| {
            records.insert(id.to_string(), record);
        })?;
        self.store().replace(merged);

        info!(
            event = "core.manager.save_completed",
            window = id,
            x = record.x,
            y = record.y,
            width = record.width,
            height = record.height
        );
        Ok(SaveOutcome::Saved(record))
    }

    /// `save_position` for shutdown paths: failures are logged, never returned.
    pub fn save_position_best_effort(&self, id: &str, path: &Path) {
        if let Err(e) = self.save_position(id, path) {
            warn!(
                event = "core.manager.save_failed",
                window = id,
                error = %e,
                error_code = e.error_code(),
                user_error = e.is_user_error()
            );
        }
    }

    fn reference_screen(&self) -> Option<ScreenBounds> {
        match self.host.screens() {
            Ok(screens) => {
                let screen = screens.first().copied();
                if screen.is_none() {
                    warn!(event = "core.manager.screens_empty");
                }
                screen
            }
            Err(e) => {
                warn!(
                    event = "core.manager.screens_unavailable",
                    error = %e,
                    fallback = "applying stored position uncorrected"
                );
                None
            }
        }
    }

    fn store(&self) -> MutexGuard<'_, GeometryStore> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn adapter(&self) -> MutexGuard<'_, Box<dyn GeometryAdapter>> {
        self.adapter.lock().unwrap_or_else(|e| e.into_inner())
    }
}
