//! Listing query composer: fetch with fallback, then filter.
//!
//! [`CatalogService::fetch_listings`] reads the pre-joined listing view and,
//! when that read fails, synthesizes listings from raw records. Filtering and
//! category derivation are pure and live in [`crate::query::filtering`];
//! [`CatalogService::load_view`] ties the steps together for a presentation
//! layer.

pub mod fallback;
pub mod refresh;
pub mod rows;
pub mod service;
pub mod settings;

pub use fallback::{UNKNOWN_PROVIDER, synthesize_listings};
pub use refresh::{RefreshTicket, RefreshTracker};
pub use service::{CatalogService, CatalogView, FetchedListings, build_view};
pub use settings::{
    BadgeDraw, CatalogSettings, DEFAULT_DETAILS_COLLECTION,
    DEFAULT_FALLBACK_COLLECTION, DEFAULT_FALLBACK_REPUTATION,
    DEFAULT_FALLBACK_REVIEW_COUNT, DEFAULT_ORGANIZATIONS_COLLECTION,
    DEFAULT_PRIMARY_VIEW, FallbackSeed, SustainabilityPolicy,
};
