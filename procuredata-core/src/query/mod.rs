pub mod builder;
pub mod filtering;
pub mod prelude;
pub mod types;

pub use builder::{ListingQueryBuilder, RemoteQueryBuilder};
pub use filtering::{
    apply_filters, derive_available_categories, hash_filter_spec,
    matches_filter,
};
pub use types::*;
