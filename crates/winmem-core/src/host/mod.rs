//! The windowing host collaborator: whatever GUI toolkit owns the window.

mod errors;
mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use errors::HostError;
pub use traits::WindowHost;
