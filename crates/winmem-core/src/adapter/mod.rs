//! Per-platform strategies for applying and reading window geometry.
//!
//! - `direct`: native get/set are trustworthy.
//! - `offset`: get-position includes decorations that set-position excludes.
//! - `fallback`: native get-position answers the origin; an external probe fills in.

mod backends;
mod registry;
mod traits;
mod types;

pub use backends::{DirectAdapter, FallbackAdapter, OffsetAdapter};
pub use registry::{adapter_for, create_adapter};
pub use traits::GeometryAdapter;
pub use types::{Capture, SkipReason};
