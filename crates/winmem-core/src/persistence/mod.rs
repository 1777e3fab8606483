//! Durable storage of the geometry mapping in one JSON file shared by every
//! running launcher instance.

mod errors;
mod handler;
mod lock;

pub use errors::PersistenceError;
pub use handler::{Records, read_records, update_records, write_records};
