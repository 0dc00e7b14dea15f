//! Sample marketplace data for trying the catalog without a backend.
//!
//! Only compiled with the `demo` feature. The seeded store has no primary
//! listing view, so every fetch exercises the raw-record fallback.

use serde_json::{Value, json};
use uuid::Uuid;

use crate::catalog::settings::{
    DEFAULT_DETAILS_COLLECTION, DEFAULT_FALLBACK_COLLECTION,
    DEFAULT_ORGANIZATIONS_COLLECTION, DEFAULT_PRIMARY_VIEW,
};
use crate::infra::memory::InMemoryStore;
use crate::query::types::Record;
use procuredata_model::OrganizationID;

const ORGANIZATIONS: [(u128, &str, bool); 3] = [
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0001, "Acme Mobility", true),
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0002, "GridCo Energy", false),
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0003, "Terra Insights", true),
];

// (product id, name, category, description)
const PRODUCTS: [(u128, &str, &str, &str); 5] = [
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0101, "Clima EU", "ESG", "Regional emission factors"),
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0102, "Fleet telemetry", "Mobility", "Anonymized vehicle traces"),
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0103, "Grid load forecast", "Energy", "Hourly load forecasts"),
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0104, "Supplier risk index", "ESG", "Scope 3 supplier scoring"),
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0105, "Parking occupancy", "Mobility", "Live parking sensor feed"),
];

// (asset id, product index, organization index, price, pricing model)
const ASSETS: [(u128, usize, usize, f64, &str); 5] = [
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0201, 0, 2, 0.0, "free"),
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0202, 1, 0, 49.0, "subscription"),
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0203, 2, 1, 120.0, "one_time"),
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0204, 3, 2, 0.0, "free"),
    (0x0190_a0b4_7c1e_7a4f_9d2b_0000_0000_0205, 4, 0, 0.02, "usage"),
];

/// Organization ids present in the demo data, in seed order.
pub fn demo_organizations() -> Vec<(OrganizationID, &'static str)> {
    ORGANIZATIONS
        .iter()
        .map(|(id, name, _)| (OrganizationID(Uuid::from_u128(*id)), *name))
        .collect()
}

/// Store seeded with raw assets, products and organizations.
pub fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new()
        .with_collection(DEFAULT_ORGANIZATIONS_COLLECTION, organizations())
        .with_collection(DEFAULT_DETAILS_COLLECTION, products())
        .with_collection(DEFAULT_FALLBACK_COLLECTION, assets());
    store.mark_unavailable(DEFAULT_PRIMARY_VIEW);
    store
}

fn organizations() -> Vec<Record> {
    ORGANIZATIONS
        .iter()
        .map(|(id, name, verified)| {
            record(json!({
                "id": Uuid::from_u128(*id),
                "name": name,
                "kyb_verified": verified,
            }))
        })
        .collect()
}

fn products() -> Vec<Record> {
    PRODUCTS
        .iter()
        .map(|(id, name, category, description)| {
            record(json!({
                "id": Uuid::from_u128(*id),
                "name": name,
                "category": category,
                "description": description,
            }))
        })
        .collect()
}

fn assets() -> Vec<Record> {
    ASSETS
        .iter()
        .map(|(id, product, org, price, pricing_model)| {
            record(json!({
                "id": Uuid::from_u128(*id),
                "product_id": Uuid::from_u128(PRODUCTS[*product].0),
                "holder_org_id": Uuid::from_u128(ORGANIZATIONS[*org].0),
                "price": price,
                "pricing_model": pricing_model,
                "currency": "EUR",
                "status": "available",
            }))
        })
        .collect()
}

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => Record::new(),
    }
}
