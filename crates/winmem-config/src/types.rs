use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level window memory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinMemConfig {
    pub storage: StorageConfig,
    pub adapter: AdapterConfig,
    pub bounds: BoundsConfig,
    pub lock: LockConfig,
    pub probe: ProbeConfig,
    pub drift: DriftConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit geometry file location. `None` uses the per-user config dir.
    pub path: Option<PathBuf>,
}

/// Which platform geometry strategy to run.
///
/// `Auto` picks per build target; the explicit variants exist for hosts whose
/// window toolkit behaves differently from the platform default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterVariant {
    #[default]
    Auto,
    Direct,
    Offset,
    Fallback,
}

impl AdapterVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterVariant::Auto => "auto",
            AdapterVariant::Direct => "direct",
            AdapterVariant::Offset => "offset",
            AdapterVariant::Fallback => "fallback",
        }
    }

    /// Resolve `Auto` against the build target. Explicit variants pass through.
    pub fn resolve(self) -> AdapterVariant {
        match self {
            AdapterVariant::Auto => {
                if cfg!(target_os = "windows") {
                    AdapterVariant::Offset
                } else if cfg!(target_os = "linux") {
                    AdapterVariant::Fallback
                } else {
                    AdapterVariant::Direct
                }
            }
            other => other,
        }
    }
}

impl std::fmt::Display for AdapterVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AdapterVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(AdapterVariant::Auto),
            "direct" => Ok(AdapterVariant::Direct),
            "offset" => Ok(AdapterVariant::Offset),
            "fallback" => Ok(AdapterVariant::Fallback),
            _ => Err(format!(
                "Unknown adapter variant '{}'. Known variants: auto, direct, offset, fallback",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub variant: AdapterVariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    /// Pixels of the window that must stay on screen after clamping.
    pub min_visible_offset: i32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min_visible_offset: 20,
        }
    }
}

/// Retry policy for the shared geometry file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    pub lock_attempts: u32,
    pub lock_interval_ms: u64,
    pub open_attempts: u32,
    pub open_interval_ms: u64,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            lock_attempts: 10,
            lock_interval_ms: 20,
            open_attempts: 5,
            open_interval_ms: 50,
        }
    }
}

impl LockConfig {
    pub fn lock_interval(&self) -> Duration {
        Duration::from_millis(self.lock_interval_ms)
    }

    pub fn open_interval(&self) -> Duration {
        Duration::from_millis(self.open_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub command: String,
    /// Anchored title match; the first window found wins.
    pub title_prefix: String,
    /// Reports with either dimension at or below this are rejected.
    pub min_dimension: u32,
    /// The probe process is killed if it has not exited by then.
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            command: "xdotool".to_string(),
            title_prefix: "SimpleAI".to_string(),
            min_dimension: 50,
            timeout_ms: 2000,
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    pub enabled: bool,
    pub poll_interval_ms: u64,
    pub appear_timeout_ms: u64,
    pub settle_window_ms: u64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval_ms: 100,
            appear_timeout_ms: 5000,
            settle_window_ms: 2000,
        }
    }
}

impl DriftConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Number of polls spent waiting for the window to become queryable.
    pub fn appear_polls(&self) -> u64 {
        self.appear_timeout_ms / self.poll_interval_ms.max(1)
    }

    /// Number of polls spent re-measuring once the window is queryable.
    pub fn settle_polls(&self) -> u64 {
        self.settle_window_ms / self.poll_interval_ms.max(1)
    }
}
