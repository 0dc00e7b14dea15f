//! Core data model definitions shared across PROCUREDATA crates.
#![allow(missing_docs)]

pub mod error;
pub mod filter_types;
pub mod ids;
pub mod listing;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{
    ALL_CATEGORIES, CategorySelection, FilterState, PriceTier,
};
pub use ids::{ListingID, OrganizationID, ProductID};
pub use listing::{DEFAULT_CURRENCY, Listing, PricingModel};
