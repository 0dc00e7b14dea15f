//! Listing synthesis from raw asset, product and organization records.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use procuredata_model::{Listing, OrganizationID, ProductID};
use tracing::warn;

use super::rows::{
    DataAssetRow, DataProductRow, OrganizationRow, currency_or_default,
};
use super::settings::FallbackSeed;

/// Provider name used when an asset's holder organization cannot be read.
pub const UNKNOWN_PROVIDER: &str = "Unknown provider";

/// Join raw rows into listings, in asset order.
///
/// Assets whose product record is missing are skipped: without it there is no
/// name or category to show. A missing organization only degrades the
/// provider name and leaves the listing unverified.
pub fn synthesize_listings(
    assets: Vec<DataAssetRow>,
    products: Vec<DataProductRow>,
    organizations: Vec<OrganizationRow>,
    seed: &FallbackSeed,
) -> Vec<Listing> {
    let products: HashMap<ProductID, DataProductRow> =
        products.into_iter().map(|row| (row.id, row)).collect();
    let organizations: HashMap<OrganizationID, OrganizationRow> =
        organizations.into_iter().map(|row| (row.id, row)).collect();

    let mut badges = seed.badges();
    let mut listings = Vec::with_capacity(assets.len());

    for asset in assets {
        let Some(product) = products.get(&asset.product_id) else {
            warn!(
                asset = %asset.id,
                product = %asset.product_id,
                "skipping asset without product record"
            );
            continue;
        };
        let organization = organizations.get(&asset.holder_org_id);

        listings.push(Listing {
            id: asset.id,
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            provider_id: asset.holder_org_id,
            provider_name: organization
                .map(|org| org.name.clone())
                .unwrap_or_else(|| UNKNOWN_PROVIDER.to_string()),
            pricing_model: asset.pricing_model,
            price: asset.price,
            currency: currency_or_default(asset.currency),
            has_green_badge: badges.next_badge(),
            kyb_verified: organization.is_some_and(|org| org.kyb_verified),
            reputation_score: seed.reputation_score,
            review_count: seed.review_count,
        });
    }

    listings
}

/// Distinct values in first-appearance order, for `in.(..)` predicates.
pub(crate) fn distinct<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Copy,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    values.into_iter().filter(|value| seen.insert(*value)).collect()
}
