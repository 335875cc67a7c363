//! Crash-safe JSON status snapshot persisted via atomic replace

mod error;
mod io;
mod store;

pub use error::StatusError;
pub use io::atomic_write;
pub use store::{StatusDocument, StatusStore};
