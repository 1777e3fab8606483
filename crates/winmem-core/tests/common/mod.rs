//! Fixtures shared by the window memory integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tempfile::TempDir;
use winmem_core::{
    GeometryAdapter, GeometryProbe, HostError, ProbeError, ProbeReport, ScreenBounds, WinMemConfig,
    WindowHost, WindowPositionManager, WindowRecord, probe::parse_probe_report,
};

#[derive(Debug)]
struct FakeState {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    decoration: (i32, i32),
    origin_only: bool,
    relocate_once: Option<(i32, i32)>,
    set_positions: Vec<(i32, i32)>,
}

/// One launcher window as seen through the toolkit.
#[derive(Debug)]
pub struct FakeWindow {
    state: Mutex<FakeState>,
}

impl FakeWindow {
    pub fn at(x: i32, y: i32, width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self::new(x, y, width, height))
    }

    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            state: Mutex::new(FakeState {
                x,
                y,
                width,
                height,
                decoration: (0, 0),
                origin_only: false,
                relocate_once: None,
                set_positions: Vec::new(),
            }),
        }
    }

    /// get-position reports `(dx, dy)` more than set-position was given.
    pub fn decorated(self, dx: i32, dy: i32) -> Self {
        self.lock().decoration = (dx, dy);
        self
    }

    /// get-position always answers the origin.
    pub fn origin_only(self) -> Self {
        self.lock().origin_only = true;
        self
    }

    /// The window manager moves the window once, right after it is first placed.
    pub fn relocated_to(self, x: i32, y: i32) -> Self {
        self.lock().relocate_once = Some((x, y));
        self
    }

    pub fn geometry(&self) -> WindowRecord {
        let state = self.lock();
        WindowRecord::new(state.x, state.y, state.width, state.height)
    }

    pub fn set_positions(&self) -> Vec<(i32, i32)> {
        self.lock().set_positions.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl WindowHost for FakeWindow {
    fn position(&self) -> Result<(i32, i32), HostError> {
        let state = self.lock();
        if state.origin_only {
            return Ok((0, 0));
        }
        Ok((state.x, state.y))
    }

    fn set_position(&self, x: i32, y: i32) -> Result<(), HostError> {
        let mut state = self.lock();
        state.set_positions.push((x, y));
        match state.relocate_once.take() {
            Some((rx, ry)) => {
                state.x = rx;
                state.y = ry;
            }
            None => {
                state.x = x + state.decoration.0;
                state.y = y + state.decoration.1;
            }
        }
        Ok(())
    }

    fn size(&self) -> Result<(u32, u32), HostError> {
        let state = self.lock();
        Ok((state.width, state.height))
    }

    fn set_size(&self, width: u32, height: u32) -> Result<(), HostError> {
        let mut state = self.lock();
        state.width = width;
        state.height = height;
        Ok(())
    }

    fn screens(&self) -> Result<Vec<ScreenBounds>, HostError> {
        Ok(vec![ScreenBounds::new(1920, 1080)])
    }
}

/// Probe answering with fixed `KEY=VALUE` output, or missing entirely.
pub struct CannedProbe(pub Option<&'static str>);

impl GeometryProbe for CannedProbe {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn is_available(&self) -> bool {
        self.0.is_some()
    }

    fn query(&self) -> Result<ProbeReport, ProbeError> {
        match self.0 {
            Some(output) => Ok(parse_probe_report(output)),
            None => Err(ProbeError::ToolNotFound {
                tool: "canned".to_string(),
            }),
        }
    }
}

/// Temporary geometry file location; the file itself is not created.
pub struct Workspace {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("SimpleAI").join("windows.json");
        Self { _dir: dir, path }
    }

    pub fn read_json(&self) -> serde_json::Value {
        let contents = std::fs::read_to_string(&self.path).unwrap();
        serde_json::from_str(&contents).unwrap()
    }
}

pub fn manager_for(
    window: &Arc<FakeWindow>,
    adapter: Box<dyn GeometryAdapter>,
) -> WindowPositionManager {
    let host: Arc<dyn WindowHost> = window.clone();
    WindowPositionManager::with_adapter(host, WinMemConfig::default(), adapter)
}

/// Poll `condition` until it holds or `timeout` passes.
pub fn eventually(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    condition()
}
