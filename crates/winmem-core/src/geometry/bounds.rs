use tracing::debug;

use super::types::{ScreenBounds, WindowRecord};

/// Clamp a window position so at least `min_visible_offset` pixels stay on screen.
///
/// Only the position changes; width and height are passed through untouched by
/// callers. The top edge is never allowed above the screen so the titlebar stays
/// reachable.
pub fn correct_position(
    record: &WindowRecord,
    screen: &ScreenBounds,
    min_visible_offset: i32,
) -> (i32, i32) {
    let min_visible = i64::from(min_visible_offset);
    let width = i64::from(record.width);
    let screen_width = i64::from(screen.width);
    let screen_height = i64::from(screen.height);

    let mut x = i64::from(record.x);
    let mut y = i64::from(record.y);

    if x < -(width - min_visible) {
        x = -(width - min_visible);
    }
    if x > screen_width - min_visible {
        x = screen_width - min_visible;
    }
    if y < 0 {
        y = 0;
    }
    if y > screen_height - min_visible {
        y = screen_height - min_visible;
    }

    let corrected = (saturate(x), saturate(y));
    if corrected != record.position() {
        debug!(
            event = "core.geometry.position_corrected",
            from_x = record.x,
            from_y = record.y,
            to_x = corrected.0,
            to_y = corrected.1,
            screen_width = screen.width,
            screen_height = screen.height
        );
    }
    corrected
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
