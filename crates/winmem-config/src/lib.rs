//! Configuration for window memory.
//!
//! Settings live in `<config_dir>/SimpleAI/winmem.toml`. Every section is optional;
//! a missing file yields the defaults the launcher has always shipped with.

mod errors;
mod loading;
mod paths;
mod types;

pub use errors::ConfigError;
pub use paths::{APP_DIR_NAME, GEOMETRY_FILE_ENV, config_file_path, geometry_file_path};
pub use types::{
    AdapterConfig, AdapterVariant, BoundsConfig, DriftConfig, LockConfig, ProbeConfig,
    StorageConfig, WinMemConfig,
};
