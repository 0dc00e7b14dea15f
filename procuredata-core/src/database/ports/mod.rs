//! Outbound ports consumed by the catalog.

pub mod remote_store;

pub use remote_store::RemoteStore;
