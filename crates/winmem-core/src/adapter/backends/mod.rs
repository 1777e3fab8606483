//! Platform geometry adapter implementations.

mod direct;
mod fallback;
mod offset;

pub use direct::DirectAdapter;
pub use fallback::FallbackAdapter;
pub use offset::OffsetAdapter;
