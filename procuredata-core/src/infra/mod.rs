//! Concrete [`crate::database::RemoteStore`] adapters.

pub mod memory;
#[cfg(feature = "postgrest")]
pub mod postgrest;

pub use memory::InMemoryStore;
#[cfg(feature = "postgrest")]
pub use postgrest::PostgrestStore;
