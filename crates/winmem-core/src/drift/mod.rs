//! Short-lived background watch that undoes window-manager relocation right
//! after a window is placed.

mod monitor;

pub use monitor::{measure, spawn};
