//! Advisory locking on the shared geometry file.
//!
//! Every attempt is non-blocking; contention is absorbed by a bounded retry loop
//! so a sibling instance mid-save can never stall the UI thread indefinitely.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::debug;
use winmem_config::LockConfig;

use super::errors::PersistenceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LockMode {
    Shared,
    Exclusive,
}

impl LockMode {
    fn as_str(&self) -> &'static str {
        match self {
            LockMode::Shared => "shared",
            LockMode::Exclusive => "exclusive",
        }
    }
}

/// An open file holding an advisory lock. Dropping it releases the lock.
pub(crate) struct LockedFile {
    guard: imp::Guard,
}

impl LockedFile {
    pub(crate) fn file(&self) -> &File {
        &self.guard
    }
}

/// Lock `file`, retrying up to `policy.lock_attempts` times `policy.lock_interval()` apart.
pub(crate) fn lock_with_retry(
    file: File,
    path: &Path,
    mode: LockMode,
    policy: &LockConfig,
) -> Result<LockedFile, PersistenceError> {
    let attempts = policy.lock_attempts.max(1);
    let mut file = file;
    let mut attempt = 1;

    loop {
        match imp::try_lock(file, mode) {
            Ok(guard) => return Ok(LockedFile { guard }),
            Err((returned, source)) if attempt < attempts => {
                debug!(
                    event = "core.persistence.lock_retry",
                    path = %path.display(),
                    mode = mode.as_str(),
                    attempt = attempt,
                    error = %source
                );
                file = returned;
                attempt += 1;
                std::thread::sleep(policy.lock_interval());
            }
            Err((_, source)) => {
                return Err(PersistenceError::LockContention {
                    path: path.to_path_buf(),
                    attempts,
                    source,
                });
            }
        }
    }
}

#[cfg(unix)]
mod imp {
    use super::{File, LockMode, io};
    use nix::fcntl::{Flock, FlockArg};

    pub(super) type Guard = Flock<File>;

    pub(super) fn try_lock(file: File, mode: LockMode) -> Result<Guard, (File, io::Error)> {
        let arg = match mode {
            LockMode::Shared => FlockArg::LockSharedNonblock,
            LockMode::Exclusive => FlockArg::LockExclusiveNonblock,
        };
        Flock::lock(file, arg).map_err(|(file, errno)| (file, io::Error::from(errno)))
    }
}

#[cfg(windows)]
mod imp {
    use super::{File, LockMode, io};
    use std::os::windows::io::AsRawHandle;
    use windows_sys::Win32::Foundation::HANDLE;
    use windows_sys::Win32::Storage::FileSystem::{
        LOCKFILE_EXCLUSIVE_LOCK, LOCKFILE_FAIL_IMMEDIATELY, LockFileEx,
    };
    use windows_sys::Win32::System::IO::OVERLAPPED;

    // Closing the handle releases the byte-range lock.
    pub(super) type Guard = File;

    pub(super) fn try_lock(file: File, mode: LockMode) -> Result<Guard, (File, io::Error)> {
        let mut flags = LOCKFILE_FAIL_IMMEDIATELY;
        if mode == LockMode::Exclusive {
            flags |= LOCKFILE_EXCLUSIVE_LOCK;
        }

        // SAFETY: the handle comes from a live `File` owned by this frame, and the
        // zeroed OVERLAPPED outlives the call (the lock is requested synchronously).
        let ok = unsafe {
            let mut overlapped: OVERLAPPED = std::mem::zeroed();
            LockFileEx(
                file.as_raw_handle() as HANDLE,
                flags,
                0,
                u32::MAX,
                u32::MAX,
                &mut overlapped,
            )
        };

        if ok == 0 {
            Err((file, io::Error::last_os_error()))
        } else {
            Ok(file)
        }
    }
}
