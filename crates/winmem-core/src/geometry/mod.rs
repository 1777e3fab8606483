mod bounds;
mod store;
mod types;

pub use bounds::correct_position;
pub use store::GeometryStore;
pub use types::{PlatformOffset, ScreenBounds, WindowRecord};
