//! Remote data access boundary.
//!
//! [`ports`] holds the traits the catalog depends on; concrete adapters live
//! in [`crate::infra`].

pub mod ports;

pub use ports::RemoteStore;
