//! Wire shapes of the collections the catalog reads.
//!
//! Remote stores are loose about numeric columns (`numeric` often arrives as a
//! string) and about nulls, so decoding is lenient where it cannot change the
//! meaning of a row.

use procuredata_model::{
    DEFAULT_CURRENCY, Listing, ListingID, OrganizationID, PricingModel,
    ProductID,
};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::query::types::Record;

/// One row of the pre-joined listing view.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingViewRow {
    pub id: ListingID,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub category: String,
    pub provider_id: OrganizationID,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub provider_name: String,
    #[serde(default, deserialize_with = "pricing_model")]
    pub pricing_model: PricingModel,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub has_green_badge: bool,
    #[serde(default, deserialize_with = "flag")]
    pub kyb_verified: bool,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub reputation_score: f64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub review_count: u32,
}

impl From<ListingViewRow> for Listing {
    fn from(row: ListingViewRow) -> Self {
        Listing {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            provider_id: row.provider_id,
            provider_name: row.provider_name,
            pricing_model: row.pricing_model,
            price: row.price,
            currency: currency_or_default(row.currency),
            has_green_badge: row.has_green_badge,
            kyb_verified: row.kyb_verified,
            reputation_score: row.reputation_score.clamp(0.0, 5.0) as f32,
            review_count: row.review_count,
        }
    }
}

/// Raw sellable asset: price and ownership, no descriptive data.
#[derive(Debug, Clone, Deserialize)]
pub struct DataAssetRow {
    pub id: ListingID,
    pub product_id: ProductID,
    pub holder_org_id: OrganizationID,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "pricing_model")]
    pub pricing_model: PricingModel,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Descriptive record an asset sells.
#[derive(Debug, Clone, Deserialize)]
pub struct DataProductRow {
    pub id: ProductID,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationRow {
    pub id: OrganizationID,
    pub name: String,
    #[serde(default, deserialize_with = "flag")]
    pub kyb_verified: bool,
}

/// Decode every record of `collection`, failing on the first bad row.
pub fn decode_rows<T: DeserializeOwned>(
    collection: &str,
    records: Vec<Record>,
) -> StoreResult<Vec<T>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(Value::Object(record)).map_err(|err| {
                StoreError::Decode(format!("{collection} row {index}: {err}"))
            })
        })
        .collect()
}

pub(crate) fn currency_or_default(currency: Option<String>) -> String {
    currency
        .filter(|code| !code.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn pricing_model<'de, D>(deserializer: D) -> Result<PricingModel, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => raw.parse().map_err(de::Error::custom),
        None => Ok(PricingModel::default()),
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("number out of range: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("not a number: {s:?}"))),
        other => Err(de::Error::custom(format!("expected a number, got {other}"))),
    }
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_f64(deserializer)?;
    if value.is_finite() && value >= 0.0 {
        Ok(value.min(u32::MAX as f64) as u32)
    } else {
        Err(de::Error::custom(format!("expected a count, got {value}")))
    }
}
