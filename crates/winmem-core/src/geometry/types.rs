use serde::{Deserialize, Serialize};

/// Last known screen rectangle of one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowRecord {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized records mean "no saved state" or "window being destroyed".
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn with_position(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }
}

/// Correction between what set-position was given and what get-position reports.
///
/// Process-local, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformOffset {
    pub dx: i32,
    pub dy: i32,
}

impl PlatformOffset {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Coordinates to hand to set-position so the window lands at `(x, y)`.
    pub fn compensate(&self, x: i32, y: i32) -> (i32, i32) {
        (x.saturating_sub(self.dx), y.saturating_sub(self.dy))
    }
}

/// Usable area of a monitor, queried live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

impl ScreenBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
