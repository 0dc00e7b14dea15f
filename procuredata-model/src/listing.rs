use crate::error::ModelError;
use crate::ids::{ListingID, OrganizationID};
use std::fmt;
use std::str::FromStr;

/// Currency applied when a record carries none.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// How a data product is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PricingModel {
    #[default]
    Free,
    OneTime,
    Subscription,
    #[cfg_attr(feature = "serde", serde(alias = "usage_based"))]
    Usage,
}

impl PricingModel {
    pub fn all() -> &'static [PricingModel] {
        use PricingModel::*;
        &[Free, OneTime, Subscription, Usage]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            PricingModel::Free => "free",
            PricingModel::OneTime => "one_time",
            PricingModel::Subscription => "subscription",
            PricingModel::Usage => "usage",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for PricingModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(PricingModel::Free),
            "one_time" | "one-time" => Ok(PricingModel::OneTime),
            "subscription" => Ok(PricingModel::Subscription),
            "usage" | "usage_based" | "usage-based" => Ok(PricingModel::Usage),
            _ => Err(ModelError::UnknownPricingModel(s.to_string())),
        }
    }
}

/// Denormalized catalog entry describing one purchasable or subscribable
/// data product.
///
/// Listings are read-only here: the remote store owns their lifecycle and
/// every view refresh re-fetches them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listing {
    pub id: ListingID,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub provider_id: OrganizationID,
    pub provider_name: String,
    pub pricing_model: PricingModel,
    pub price: f64,
    pub currency: String,
    /// Sustainability flag.
    pub has_green_badge: bool,
    /// Verified-provider flag.
    pub kyb_verified: bool,
    /// 0 to 5.
    pub reputation_score: f32,
    pub review_count: u32,
}

impl Listing {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    pub fn is_paid(&self) -> bool {
        self.price > 0.0
    }
}
