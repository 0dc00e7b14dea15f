//! # PROCUREDATA Core
//!
//! Listing query composer for the PROCUREDATA data marketplace: read catalog
//! listings from a managed backend, degrade to a raw-record join when the
//! pre-joined view is unavailable, and narrow the result with client-side
//! filters.
//!
//! ## Feature Flags
//!
//! - `postgrest` (default): HTTP adapter for PostgREST-style backends
//! - `demo`: in-memory sample marketplace for trying the pipeline offline
//!
//! ## Architecture
//!
//! - [`query`]: remote query shapes, filter builders and the pure filter
//!   pipeline
//! - [`database`]: the [`database::RemoteStore`] port
//! - [`infra`]: store adapters (PostgREST, in-memory)
//! - [`catalog`]: fetch-with-fallback, view assembly and refresh tracking
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use procuredata_core::prelude::*;
//!
//! async fn free_esg_listings(
//!     store: Arc<dyn RemoteStore>,
//! ) -> Result<Vec<Listing>, CatalogError> {
//!     let service = CatalogService::new(store, CatalogSettings::default());
//!     let filter = ListingQueryBuilder::new().category("ESG").free_only().build();
//!
//!     let view = service.load_view(&ListingScope::Marketplace, &filter).await?;
//!     Ok(view.listings)
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod catalog;
pub mod database;
#[cfg(feature = "demo")]
pub mod demo;
pub mod error;
pub mod infra;
pub mod query;

pub use catalog::{
    CatalogService, CatalogSettings, CatalogView, FallbackSeed,
    FetchedListings, RefreshTicket, RefreshTracker, SustainabilityPolicy,
};
pub use database::RemoteStore;
pub use error::{CatalogError, Result, StoreError, StoreResult};
pub use infra::InMemoryStore;
#[cfg(feature = "postgrest")]
pub use infra::PostgrestStore;
pub use query::{
    ListingQueryBuilder, ListingScope, ListingSource, RemoteQuery,
    RemoteQueryBuilder, apply_filters, derive_available_categories,
    hash_filter_spec,
};

pub mod prelude {
    pub use crate::catalog::{
        CatalogService, CatalogSettings, CatalogView, FetchedListings,
        RefreshTracker,
    };
    pub use crate::database::RemoteStore;
    pub use crate::error::{CatalogError, StoreError};
    pub use crate::query::prelude::*;
    pub use procuredata_model::prelude::*;
}
