#![allow(dead_code)]

use procuredata_core::InMemoryStore;
use procuredata_core::query::Record;
use procuredata_model::{Listing, ListingID, OrganizationID, PricingModel};
use serde_json::{Value, json};

pub const ACME: &str = "0190a0b4-7c1e-7a4f-9d2b-000000000001";
pub const GRIDCO: &str = "0190a0b4-7c1e-7a4f-9d2b-000000000002";

pub fn record(value: Value) -> Record {
    value
        .as_object()
        .cloned()
        .expect("fixture must be a JSON object")
}

pub fn listing(
    name: &str,
    provider: &str,
    category: &str,
    price: f64,
    sustainable: bool,
    verified: bool,
) -> Listing {
    Listing {
        id: ListingID::new(),
        name: name.to_string(),
        description: None,
        category: category.to_string(),
        provider_id: OrganizationID::new(),
        provider_name: provider.to_string(),
        pricing_model: if price == 0.0 {
            PricingModel::Free
        } else {
            PricingModel::Subscription
        },
        price,
        currency: "EUR".to_string(),
        has_green_badge: sustainable,
        kyb_verified: verified,
        reputation_score: 4.0,
        review_count: 10,
    }
}

/// A mixed catalog covering every filter dimension.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing("Clima EU", "Acme", "ESG", 0.0, true, true),
        listing("Fleet telemetry", "Acme Mobility", "Mobility", 49.0, false, true),
        listing("Grid load", "GridCo", "Energy", 120.0, true, false),
        listing("Supplier risk", "Terra", "ESG", 0.0, false, false),
        listing("climate normals", "Meteo", "esg", 5.0, true, true),
        listing("Parking", "City Data", "Mobility", 0.02, false, false),
    ]
}

/// Raw records for the fallback join: two assets held by Acme, one by
/// GridCo, every product and organization row present.
pub fn raw_store() -> InMemoryStore {
    InMemoryStore::new()
        .with_collection(
            "organizations",
            vec![
                record(json!({ "id": ACME, "name": "Acme", "kyb_verified": true })),
                record(json!({ "id": GRIDCO, "name": "GridCo", "kyb_verified": false })),
            ],
        )
        .with_collection(
            "data_products",
            vec![
                record(json!({
                    "id": "0190a0b4-7c1e-7a4f-9d2b-000000000101",
                    "name": "Clima EU",
                    "category": "ESG",
                    "description": "Regional emission factors"
                })),
                record(json!({
                    "id": "0190a0b4-7c1e-7a4f-9d2b-000000000102",
                    "name": "Grid load",
                    "category": "Energy"
                })),
            ],
        )
        .with_collection(
            "data_assets",
            vec![
                record(json!({
                    "id": "0190a0b4-7c1e-7a4f-9d2b-000000000201",
                    "product_id": "0190a0b4-7c1e-7a4f-9d2b-000000000101",
                    "holder_org_id": ACME,
                    "price": 0,
                    "pricing_model": "free"
                })),
                record(json!({
                    "id": "0190a0b4-7c1e-7a4f-9d2b-000000000202",
                    "product_id": "0190a0b4-7c1e-7a4f-9d2b-000000000102",
                    "holder_org_id": GRIDCO,
                    "price": "75.00",
                    "pricing_model": "subscription",
                    "currency": "USD"
                })),
                record(json!({
                    "id": "0190a0b4-7c1e-7a4f-9d2b-000000000203",
                    "product_id": "0190a0b4-7c1e-7a4f-9d2b-000000000102",
                    "holder_org_id": ACME,
                    "price": 10,
                    "pricing_model": "one_time"
                })),
            ],
        )
}
