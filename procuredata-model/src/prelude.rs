//! Catalog-view snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in procurectl or other presentation layers.

pub use super::filter_types::{
    ALL_CATEGORIES, CategorySelection, FilterState, PriceTier,
};
pub use super::ids::{ListingID, OrganizationID, ProductID};
pub use super::listing::{DEFAULT_CURRENCY, Listing, PricingModel};
