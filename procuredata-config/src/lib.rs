//! Configuration loading for PROCUREDATA.
//!
//! Settings come from built-in defaults, an optional `procuredata.toml` and
//! the environment (a `.env` file is loaded first when present), with later
//! sources taking precedence. The result converts into the core crate's
//! [`procuredata_core::CatalogSettings`].

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    CatalogConfig, Config, ConfigMetadata, FallbackConfig, StoreConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
