use std::path::PathBuf;

use crate::types::WinMemConfig;

/// Directory name under the per-user config dir shared by every launcher instance.
pub const APP_DIR_NAME: &str = "SimpleAI";

/// Overrides the geometry file location (used by tests and portable installs).
pub const GEOMETRY_FILE_ENV: &str = "WINMEM_GEOMETRY_FILE";

const GEOMETRY_FILE_NAME: &str = "windows.json";
const CONFIG_FILE_NAME: &str = "winmem.toml";

/// Resolve the shared geometry file.
///
/// Priority: `WINMEM_GEOMETRY_FILE` > `storage.path` > `<config_dir>/SimpleAI/windows.json`.
/// Falls back to `./.SimpleAI/windows.json` when no config directory can be determined.
pub fn geometry_file_path(config: &WinMemConfig) -> PathBuf {
    if let Ok(path_str) = std::env::var(GEOMETRY_FILE_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    if let Some(path) = &config.storage.path {
        return path.clone();
    }

    match dirs::config_dir() {
        Some(dir) => dir.join(APP_DIR_NAME).join(GEOMETRY_FILE_NAME),
        None => {
            tracing::error!(
                event = "config.paths.config_dir_not_found",
                fallback = ".",
                "Could not determine config directory - using current directory as fallback"
            );
            PathBuf::from(".")
                .join(format!(".{}", APP_DIR_NAME))
                .join(GEOMETRY_FILE_NAME)
        }
    }
}

/// `<config_dir>/SimpleAI/winmem.toml`, if the platform has a config directory.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}
