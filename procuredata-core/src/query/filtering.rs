//! Client-side narrowing of fetched listings.
//!
//! Everything here is pure: the same listings and filter state always yield
//! the same output, input order is preserved, and nothing can fail. The remote
//! read is the only fallible step of the pipeline and lives in
//! [`crate::catalog`].

use crate::query::types::ListingScope;
use procuredata_model::{
    ALL_CATEGORIES, CategorySelection, FilterState, Listing, PriceTier,
};
use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Keep the listings satisfying every active predicate of `filter`.
///
/// Stable: the result is a sub-sequence of `listings` in the original order.
pub fn apply_filters(listings: &[Listing], filter: &FilterState) -> Vec<Listing> {
    if filter.is_neutral() {
        return listings.to_vec();
    }

    // Lowercase once instead of per listing.
    let needle = filter.search.to_lowercase();
    listings
        .iter()
        .filter(|listing| matches_prepared(listing, filter, &needle))
        .cloned()
        .collect()
}

/// Whether one listing passes `filter`.
pub fn matches_filter(listing: &Listing, filter: &FilterState) -> bool {
    matches_prepared(listing, filter, &filter.search.to_lowercase())
}

fn matches_prepared(listing: &Listing, filter: &FilterState, needle: &str) -> bool {
    matches_search(listing, needle)
        && matches_category(listing, &filter.category)
        && (!filter.only_sustainable || listing.has_green_badge)
        && (!filter.only_verified || listing.kyb_verified)
        && matches_price_tier(listing, filter.price_tier)
}

fn matches_search(listing: &Listing, needle: &str) -> bool {
    needle.is_empty()
        || listing.name.to_lowercase().contains(needle)
        || listing.provider_name.to_lowercase().contains(needle)
}

fn matches_category(listing: &Listing, category: &CategorySelection) -> bool {
    match category {
        CategorySelection::All => true,
        CategorySelection::Named(name) => listing.category == *name,
    }
}

fn matches_price_tier(listing: &Listing, tier: PriceTier) -> bool {
    match tier {
        PriceTier::All => true,
        PriceTier::Free => listing.is_free(),
        PriceTier::Paid => listing.is_paid(),
    }
}

/// Distinct categories present in `listings`, prefixed with the `"all"`
/// sentinel.
///
/// Categories follow first-appearance order. A listing whose category is
/// literally `"all"` does not produce a second sentinel.
pub fn derive_available_categories(listings: &[Listing]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(listings.len() + 1);
    seen.insert(ALL_CATEGORIES);

    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for listing in listings {
        if seen.insert(listing.category.as_str()) {
            categories.push(listing.category.clone());
        }
    }
    categories
}

/// Compute a stable key for a view's scope and filter state.
///
/// The search term is lowercased because matching ignores case; two filter
/// states with the same key always select the same listings.
pub fn hash_filter_spec(scope: &ListingScope, filter: &FilterState) -> u64 {
    let mut hasher = DefaultHasher::new();
    scope.hash(&mut hasher);
    filter.search.to_lowercase().hash(&mut hasher);
    filter.category.hash(&mut hasher);
    filter.only_sustainable.hash(&mut hasher);
    filter.only_verified.hash(&mut hasher);
    filter.price_tier.hash(&mut hasher);
    hasher.finish()
}
