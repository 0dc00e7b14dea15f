use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

pub const DEFAULT_PRIMARY_VIEW: &str = "marketplace_listings";
pub const DEFAULT_FALLBACK_COLLECTION: &str = "data_assets";
pub const DEFAULT_DETAILS_COLLECTION: &str = "data_products";
pub const DEFAULT_ORGANIZATIONS_COLLECTION: &str = "organizations";

pub const DEFAULT_FALLBACK_REPUTATION: f32 = 4.5;
pub const DEFAULT_FALLBACK_REVIEW_COUNT: u32 = 12;

/// Collection names and fallback seed used by
/// [`crate::catalog::CatalogService`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Pre-joined listing view.
    pub primary_view: String,
    /// Raw asset records read when the primary view fails.
    pub fallback_collection: String,
    /// Descriptive product records joined onto each asset.
    pub details_collection: String,
    pub organizations_collection: String,
    pub fallback: FallbackSeed,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            primary_view: DEFAULT_PRIMARY_VIEW.to_string(),
            fallback_collection: DEFAULT_FALLBACK_COLLECTION.to_string(),
            details_collection: DEFAULT_DETAILS_COLLECTION.to_string(),
            organizations_collection: DEFAULT_ORGANIZATIONS_COLLECTION
                .to_string(),
            fallback: FallbackSeed::default(),
        }
    }
}

/// Values given to listings synthesized from raw records.
///
/// The raw shape has no reputation, review or sustainability data, so these
/// are placeholders rather than facts about the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackSeed {
    pub reputation_score: f32,
    pub review_count: u32,
    pub sustainability: SustainabilityPolicy,
    /// Fixes the random sustainability draw. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for FallbackSeed {
    fn default() -> Self {
        Self {
            reputation_score: DEFAULT_FALLBACK_REPUTATION,
            review_count: DEFAULT_FALLBACK_REVIEW_COUNT,
            sustainability: SustainabilityPolicy::Random,
            seed: None,
        }
    }
}

impl FallbackSeed {
    /// Fresh badge source for one fallback fetch.
    pub fn badges(&self) -> BadgeDraw {
        let rng = match self.sustainability {
            SustainabilityPolicy::Random => Some(match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            }),
            SustainabilityPolicy::Always | SustainabilityPolicy::Never => None,
        };
        BadgeDraw {
            policy: self.sustainability,
            rng,
        }
    }
}

/// How synthesized listings get their sustainability flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SustainabilityPolicy {
    /// Coin flip per record.
    #[default]
    Random,
    Always,
    Never,
}

impl SustainabilityPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            SustainabilityPolicy::Random => "random",
            SustainabilityPolicy::Always => "always",
            SustainabilityPolicy::Never => "never",
        }
    }
}

impl fmt::Display for SustainabilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SustainabilityPolicy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(SustainabilityPolicy::Random),
            "always" | "true" => Ok(SustainabilityPolicy::Always),
            "never" | "false" => Ok(SustainabilityPolicy::Never),
            other => Err(StoreError::InvalidConfig(format!(
                "unknown sustainability policy '{other}' (expected random, always or never)"
            ))),
        }
    }
}

/// Per-fetch source of sustainability flags.
#[derive(Debug)]
pub struct BadgeDraw {
    policy: SustainabilityPolicy,
    rng: Option<StdRng>,
}

impl BadgeDraw {
    pub fn next_badge(&mut self) -> bool {
        match (self.policy, self.rng.as_mut()) {
            (SustainabilityPolicy::Always, _) => true,
            (SustainabilityPolicy::Never, _) => false,
            (SustainabilityPolicy::Random, Some(rng)) => rng.random_bool(0.5),
            (SustainabilityPolicy::Random, None) => false,
        }
    }
}
