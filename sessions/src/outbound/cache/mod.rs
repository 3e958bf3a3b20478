//! Session cache outbound adapters.
//!
//! Two implementations of the [`crate::domain::ports::SessionCache`] port:
//! an in-memory slot for tests and ephemeral sessions, and a JSON-file slot
//! that survives restarts.

mod in_memory;
mod json_file;

pub use in_memory::InMemorySessionCache;
pub use json_file::JsonFileSessionCache;
