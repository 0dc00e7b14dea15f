//! Intentional query crate surface consumed by catalog views and the CLI.

pub use super::builder::{ListingQueryBuilder, RemoteQueryBuilder};
pub use super::filtering::{
    apply_filters, derive_available_categories, hash_filter_spec,
};
pub use super::types::{
    ListingScope, ListingSource, OrderBy, Predicate, Record, RemoteQuery,
    SortOrder,
};
