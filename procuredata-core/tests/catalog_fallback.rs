//! Fetch-with-fallback behaviour against the in-memory store.

mod support;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use procuredata_core::prelude::*;
use procuredata_core::{
    CatalogError, FallbackSeed, InMemoryStore, StoreError, StoreResult,
    SustainabilityPolicy,
};
use support::{ACME, GRIDCO, raw_store, record};

fn settings_with(seed: FallbackSeed) -> CatalogSettings {
    CatalogSettings {
        fallback: seed,
        ..CatalogSettings::default()
    }
}

#[tokio::test]
async fn fallback_listings_carry_placeholder_seed() {
    let store = Arc::new(raw_store());
    store.mark_unavailable("marketplace_listings");
    let service = CatalogService::new(
        store.clone(),
        settings_with(FallbackSeed {
            reputation_score: 3.5,
            review_count: 0,
            sustainability: SustainabilityPolicy::Never,
            seed: None,
        }),
    );

    let fetched = service
        .fetch_listings(&ListingScope::Marketplace)
        .await
        .expect("fallback read succeeds");

    assert_eq!(fetched.source, ListingSource::Fallback);
    assert_eq!(fetched.listings.len(), 3);
    for listing in &fetched.listings {
        assert_eq!(listing.reputation_score, 3.5);
        assert_eq!(listing.review_count, 0);
        assert!(!listing.has_green_badge);
    }
    assert_eq!(store.read_count("marketplace_listings"), 1);
}

#[tokio::test]
async fn fallback_join_fills_descriptive_fields_in_asset_order() {
    let service = CatalogService::new(
        Arc::new(raw_store()),
        CatalogSettings::default(),
    );

    let fetched = service
        .fetch_listings(&ListingScope::Marketplace)
        .await
        .expect("fallback read succeeds");

    let summary: Vec<_> = fetched
        .listings
        .iter()
        .map(|l| {
            (
                l.name.as_str(),
                l.provider_name.as_str(),
                l.price,
                l.currency.as_str(),
                l.kyb_verified,
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Clima EU", "Acme", 0.0, "EUR", true),
            ("Grid load", "GridCo", 75.0, "USD", false),
            ("Grid load", "Acme", 10.0, "EUR", true),
        ]
    );
    assert_eq!(
        fetched.listings[0].description.as_deref(),
        Some("Regional emission factors")
    );
}

#[tokio::test]
async fn seeded_random_badges_are_reproducible() {
    let settings = settings_with(FallbackSeed {
        seed: Some(2024),
        ..FallbackSeed::default()
    });
    let service = CatalogService::new(Arc::new(raw_store()), settings);

    let badges = |fetched: FetchedListings| -> Vec<bool> {
        fetched.listings.iter().map(|l| l.has_green_badge).collect()
    };
    let first = service
        .fetch_listings(&ListingScope::Marketplace)
        .await
        .expect("first fetch");
    let second = service
        .fetch_listings(&ListingScope::Marketplace)
        .await
        .expect("second fetch");

    assert_eq!(badges(first), badges(second));
}

#[tokio::test]
async fn both_reads_failing_surfaces_data_access_without_retry() {
    let store = Arc::new(InMemoryStore::new());
    let service = CatalogService::new(store.clone(), CatalogSettings::default());

    let err = service
        .fetch_listings(&ListingScope::Marketplace)
        .await
        .expect_err("nothing to read");

    match err {
        CatalogError::DataAccess { primary, fallback } => {
            assert!(matches!(primary, StoreError::CollectionUnavailable(ref c) if c == "marketplace_listings"));
            assert!(matches!(fallback, StoreError::CollectionUnavailable(ref c) if c == "data_assets"));
        }
    }
    assert_eq!(store.read_count("marketplace_listings"), 1);
    assert_eq!(store.read_count("data_assets"), 1);
    assert_eq!(store.read_count("data_products"), 0);
}

#[tokio::test]
async fn missing_organizations_fail_the_fallback_read() {
    let store = Arc::new(raw_store());
    store.mark_unavailable("organizations");
    let service = CatalogService::new(store, CatalogSettings::default());

    let err = service
        .fetch_listings(&ListingScope::Marketplace)
        .await
        .expect_err("join needs organizations");

    let CatalogError::DataAccess { fallback, .. } = err;
    assert!(matches!(fallback, StoreError::CollectionUnavailable(ref c) if c == "organizations"));
}

#[tokio::test]
async fn provider_scope_applies_to_both_read_shapes() {
    let acme: OrganizationID = ACME.parse().expect("valid uuid");
    let scope = ListingScope::Provider(acme);

    let store = Arc::new(raw_store().with_collection(
        "marketplace_listings",
        vec![
            record(serde_json::json!({
                "id": "0190a0b4-7c1e-7a4f-9d2b-000000000301",
                "name": "Clima EU",
                "category": "ESG",
                "provider_id": ACME,
                "provider_name": "Acme",
                "price": 0
            })),
            record(serde_json::json!({
                "id": "0190a0b4-7c1e-7a4f-9d2b-000000000302",
                "name": "Grid load",
                "category": "Energy",
                "provider_id": GRIDCO,
                "provider_name": "GridCo",
                "price": 75
            })),
        ],
    ));
    let service = CatalogService::new(store.clone(), CatalogSettings::default());

    let primary = service.fetch_listings(&scope).await.expect("primary read");
    assert_eq!(primary.source, ListingSource::Primary);
    assert_eq!(primary.listings.len(), 1);

    store.mark_unavailable("marketplace_listings");
    let fallback = service.fetch_listings(&scope).await.expect("fallback read");
    assert_eq!(fallback.source, ListingSource::Fallback);
    assert_eq!(fallback.listings.len(), 2);
    assert!(fallback.listings.iter().all(|l| l.provider_id == acme));
}

#[tokio::test]
async fn empty_asset_collection_skips_join_reads() {
    let store = Arc::new(InMemoryStore::new().with_collection("data_assets", Vec::new()));
    let service = CatalogService::new(store.clone(), CatalogSettings::default());

    let fetched = service
        .fetch_listings(&ListingScope::Marketplace)
        .await
        .expect("empty fallback is fine");

    assert!(fetched.listings.is_empty());
    assert_eq!(store.read_count("data_products"), 0);
    assert_eq!(store.read_count("organizations"), 0);
}

#[tokio::test]
async fn refresh_result_replaces_superseded_ticket() {
    let service = CatalogService::new(Arc::new(raw_store()), CatalogSettings::default());
    let tracker = RefreshTracker::new();
    let filter = ListingQueryBuilder::new().search("grid").build();

    let stale = tracker.begin(&ListingScope::Marketplace);
    let view = service
        .refresh(&tracker, &ListingScope::Marketplace, &filter)
        .await
        .expect("refresh succeeds")
        .expect("latest refresh is accepted");

    assert_eq!(view.listings.len(), 2);
    assert_eq!(view.total, 3);
    assert_eq!(view.categories, vec!["all", "ESG", "Energy"]);
    assert_eq!(tracker.accept(stale, ()), None);
}

/// Starts a newer marketplace refresh the first time it is read, the way a
/// keystroke arriving mid-fetch would.
struct InterruptedStore {
    inner: InMemoryStore,
    tracker: Arc<RefreshTracker>,
    interrupted: AtomicBool,
}

impl InterruptedStore {
    fn new(inner: InMemoryStore, tracker: Arc<RefreshTracker>) -> Self {
        Self {
            inner,
            tracker,
            interrupted: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl RemoteStore for InterruptedStore {
    async fn select(&self, query: &RemoteQuery) -> StoreResult<Vec<Record>> {
        if !self.interrupted.swap(true, Ordering::SeqCst) {
            self.tracker.begin(&ListingScope::Marketplace);
        }
        self.inner.select(query).await
    }
}

#[tokio::test]
async fn refresh_for_earlier_keystroke_is_dropped() {
    let tracker = Arc::new(RefreshTracker::new());
    let store = InterruptedStore::new(raw_store(), tracker.clone());
    let service = CatalogService::new(Arc::new(store), CatalogSettings::default());
    let earlier = ListingQueryBuilder::new().search("c").build();
    let later = ListingQueryBuilder::new().search("cl").build();

    let dropped = service
        .refresh(&tracker, &ListingScope::Marketplace, &earlier)
        .await
        .expect("superseded refresh is not an error");
    assert!(dropped.is_none());

    let view = service
        .refresh(&tracker, &ListingScope::Marketplace, &later)
        .await
        .expect("refresh succeeds")
        .expect("latest refresh is accepted");
    assert_eq!(view.listings.len(), 1);
    assert_eq!(view.listings[0].name, "Clima EU");
}

#[tokio::test]
async fn superseded_failure_is_dropped_instead_of_surfaced() {
    let tracker = Arc::new(RefreshTracker::new());
    let store = InterruptedStore::new(InMemoryStore::new(), tracker.clone());
    let service = CatalogService::new(Arc::new(store), CatalogSettings::default());

    let outcome = service
        .refresh(&tracker, &ListingScope::Marketplace, &FilterState::default())
        .await
        .expect("superseded failure is swallowed");
    assert!(outcome.is_none());

    let err = service
        .refresh(&tracker, &ListingScope::Marketplace, &FilterState::default())
        .await
        .expect_err("current failure surfaces");
    assert!(matches!(err, CatalogError::DataAccess { .. }));
}
