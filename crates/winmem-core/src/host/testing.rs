//! Deterministic in-memory window host for tests.
//!
//! Available under `#[cfg(test)]` for this crate and behind the `testing`
//! feature for downstream crates.

use std::sync::{Mutex, MutexGuard};

use super::errors::HostError;
use super::traits::WindowHost;
use crate::geometry::{PlatformOffset, ScreenBounds, WindowRecord};

/// One recorded call against [`SimulatedHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    Position,
    SetPosition(i32, i32),
    Size,
    SetSize(u32, u32),
    Screens,
}

#[derive(Debug)]
struct SimState {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    decoration: PlatformOffset,
    origin_only: bool,
    screens: Option<Vec<ScreenBounds>>,
    unavailable_queries: usize,
    relocation: Option<(i32, i32)>,
    failing: bool,
    calls: Vec<HostCall>,
}

/// A window whose toolkit quirks are configurable.
///
/// - `with_decoration(dx, dy)`: set-position excludes decorations, get-position
///   includes them, so a read after `set_position(x, y)` reports `(x + dx, y + dy)`.
/// - `with_origin_only_position()`: `position()` always answers `(0, 0)`.
/// - `with_relocation(x, y)`: the window manager moves the window once, right
///   after the first `set_position`.
/// - `unavailable_for(n)`: the first `n` position queries fail.
#[derive(Debug)]
pub struct SimulatedHost {
    state: Mutex<SimState>,
}

impl SimulatedHost {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            state: Mutex::new(SimState {
                x,
                y,
                width,
                height,
                decoration: PlatformOffset::default(),
                origin_only: false,
                screens: Some(vec![ScreenBounds::new(1920, 1080)]),
                unavailable_queries: 0,
                relocation: None,
                failing: false,
                calls: Vec::new(),
            }),
        }
    }

    pub fn with_decoration(self, dx: i32, dy: i32) -> Self {
        self.lock().decoration = PlatformOffset::new(dx, dy);
        self
    }

    pub fn with_origin_only_position(self) -> Self {
        self.lock().origin_only = true;
        self
    }

    pub fn with_screens(self, screens: Vec<ScreenBounds>) -> Self {
        self.lock().screens = Some(screens);
        self
    }

    pub fn without_screens(self) -> Self {
        self.lock().screens = None;
        self
    }

    pub fn with_relocation(self, x: i32, y: i32) -> Self {
        self.lock().relocation = Some((x, y));
        self
    }

    pub fn unavailable_for(self, queries: usize) -> Self {
        self.lock().unavailable_queries = queries;
        self
    }

    /// Every call fails, as when the window is mid-destruction.
    pub fn failing(self) -> Self {
        self.lock().failing = true;
        self
    }

    /// True frame geometry, bypassing any simulated quirk.
    pub fn current(&self) -> WindowRecord {
        let state = self.lock();
        WindowRecord::new(state.x, state.y, state.width, state.height)
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.lock().calls.clone()
    }

    pub fn set_position_calls(&self) -> Vec<(i32, i32)> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::SetPosition(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, SimState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl WindowHost for SimulatedHost {
    fn position(&self) -> Result<(i32, i32), HostError> {
        let mut state = self.lock();
        state.calls.push(HostCall::Position);
        if state.failing {
            return Err(HostError::unavailable("simulated teardown"));
        }
        if state.unavailable_queries > 0 {
            state.unavailable_queries -= 1;
            return Err(HostError::unavailable("window not mapped yet"));
        }
        if state.origin_only {
            return Ok((0, 0));
        }
        Ok((state.x, state.y))
    }

    fn set_position(&self, x: i32, y: i32) -> Result<(), HostError> {
        let mut state = self.lock();
        state.calls.push(HostCall::SetPosition(x, y));
        if state.failing {
            return Err(HostError::failed("set_position", "simulated teardown"));
        }
        match state.relocation.take() {
            Some((rx, ry)) => {
                state.x = rx;
                state.y = ry;
            }
            None => {
                state.x = x + state.decoration.dx;
                state.y = y + state.decoration.dy;
            }
        }
        Ok(())
    }

    fn size(&self) -> Result<(u32, u32), HostError> {
        let mut state = self.lock();
        state.calls.push(HostCall::Size);
        if state.failing {
            return Err(HostError::unavailable("simulated teardown"));
        }
        Ok((state.width, state.height))
    }

    fn set_size(&self, width: u32, height: u32) -> Result<(), HostError> {
        let mut state = self.lock();
        state.calls.push(HostCall::SetSize(width, height));
        if state.failing {
            return Err(HostError::failed("set_size", "simulated teardown"));
        }
        state.width = width;
        state.height = height;
        Ok(())
    }

    fn screens(&self) -> Result<Vec<ScreenBounds>, HostError> {
        let mut state = self.lock();
        state.calls.push(HostCall::Screens);
        state
            .screens
            .clone()
            .ok_or_else(|| HostError::failed("screens", "no monitor information"))
    }
}
