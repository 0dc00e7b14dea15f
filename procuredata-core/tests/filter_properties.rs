//! Laws and worked scenarios for the client-side filter pipeline.

mod support;

use procuredata_core::prelude::*;
use support::{listing, sample_listings};

fn representative_filters() -> Vec<FilterState> {
    vec![
        FilterState::default(),
        ListingQueryBuilder::new().search("acme").build(),
        ListingQueryBuilder::new().search("CLIM").build(),
        ListingQueryBuilder::new().category("ESG").build(),
        ListingQueryBuilder::new().category("Mobility").paid_only().build(),
        ListingQueryBuilder::new().sustainable_only().build(),
        ListingQueryBuilder::new().verified_only().free_only().build(),
        ListingQueryBuilder::new()
            .search("a")
            .sustainable_only()
            .verified_only()
            .build(),
    ]
}

fn ids(listings: &[Listing]) -> Vec<ListingID> {
    listings.iter().map(|l| l.id).collect()
}

fn is_subsequence(sub: &[ListingID], full: &[ListingID]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|id| rest.any(|candidate| candidate == id))
}

#[test]
fn neutral_filter_is_identity() {
    let listings = sample_listings();
    assert_eq!(apply_filters(&listings, &FilterState::default()), listings);
    assert!(apply_filters(&[], &FilterState::default()).is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let listings = sample_listings();
    for filter in representative_filters() {
        let once = apply_filters(&listings, &filter);
        let twice = apply_filters(&once, &filter);
        assert_eq!(once, twice, "filter {filter:?}");
    }
}

#[test]
fn output_is_an_order_preserving_subsequence() {
    let listings = sample_listings();
    let all = ids(&listings);
    for filter in representative_filters() {
        let kept = ids(&apply_filters(&listings, &filter));
        assert!(is_subsequence(&kept, &all), "filter {filter:?}");
    }
}

#[test]
fn empty_input_stays_empty_for_any_filter() {
    for filter in representative_filters() {
        assert!(apply_filters(&[], &filter).is_empty());
    }
}

#[test]
fn categories_always_lead_with_all_and_have_no_duplicates() {
    let categories = derive_available_categories(&sample_listings());
    assert_eq!(categories, vec!["all", "ESG", "Mobility", "Energy", "esg"]);

    let mut deduped = categories.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), categories.len());

    assert_eq!(derive_available_categories(&[]), vec!["all"]);
}

#[test]
fn scenario_search_hits_name_case_insensitively() {
    let clima = listing("Clima EU", "Acme", "ESG", 0.0, true, true);
    let filter = ListingQueryBuilder::new().search("clima").build();

    assert_eq!(apply_filters(&[clima.clone()], &filter), vec![clima]);
}

#[test]
fn scenario_unmatched_search_yields_nothing() {
    let clima = listing("Clima EU", "Acme", "ESG", 0.0, true, true);
    let filter = ListingQueryBuilder::new().search("zzz").build();

    assert!(apply_filters(&[clima], &filter).is_empty());
}

#[test]
fn scenario_free_tier_keeps_only_zero_price() {
    let free = listing("Open data", "Acme", "ESG", 0.0, false, false);
    let paid = listing("Premium", "Acme", "ESG", 50.0, false, false);
    let filter = ListingQueryBuilder::new().free_only().build();

    assert_eq!(apply_filters(&[free.clone(), paid], &filter), vec![free]);
}

#[test]
fn scenario_verified_only_without_verified_listings() {
    let listings = vec![
        listing("A", "P", "ESG", 0.0, true, false),
        listing("B", "Q", "Energy", 10.0, false, false),
    ];
    let filter = ListingQueryBuilder::new().verified_only().build();

    assert!(apply_filters(&listings, &filter).is_empty());
}

#[test]
fn search_term_is_not_trimmed() {
    let listings = vec![listing("Clima EU", "Acme", "ESG", 0.0, true, true)];
    let filter = ListingQueryBuilder::new().search(" clima").build();

    assert!(apply_filters(&listings, &filter).is_empty());
}

#[test]
fn category_sentinel_in_data_does_not_duplicate() {
    let listings = vec![
        listing("A", "P", "all", 0.0, false, false),
        listing("B", "P", "ESG", 0.0, false, false),
    ];
    assert_eq!(derive_available_categories(&listings), vec!["all", "ESG"]);
}
