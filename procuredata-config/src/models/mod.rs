use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use procuredata_core::catalog::{
    CatalogSettings, FallbackSeed, SustainabilityPolicy,
};
use url::Url;

use crate::loader::error::ConfigLoadError;

pub mod sources;

pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub catalog: CatalogConfig,
    pub fallback: FallbackConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Settings for [`procuredata_core::CatalogService`].
    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            primary_view: self.catalog.primary_view.clone(),
            fallback_collection: self.catalog.fallback_collection.clone(),
            details_collection: self.catalog.details_collection.clone(),
            organizations_collection: self
                .catalog
                .organizations_collection
                .clone(),
            fallback: FallbackSeed {
                reputation_score: self.fallback.reputation_score,
                review_count: self.fallback.review_count,
                sustainability: self.fallback.sustainability,
                seed: self.fallback.seed,
            },
        }
    }

    /// Store URL, or an error naming the setting when none is configured.
    pub fn require_store_url(&self) -> Result<&Url, ConfigLoadError> {
        self.store.url.as_ref().ok_or(ConfigLoadError::Missing {
            field: "PROCUREDATA_STORE_URL",
        })
    }
}

#[derive(Clone)]
pub struct StoreConfig {
    pub url: Option<Url>,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_ref().map(Url::as_str))
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
        }
    }
}

/// Collection names read by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub primary_view: String,
    pub fallback_collection: String,
    pub details_collection: String,
    pub organizations_collection: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let defaults = CatalogSettings::default();
        Self {
            primary_view: defaults.primary_view,
            fallback_collection: defaults.fallback_collection,
            details_collection: defaults.details_collection,
            organizations_collection: defaults.organizations_collection,
        }
    }
}

/// Placeholder values for listings synthesized from raw records.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackConfig {
    pub reputation_score: f32,
    pub review_count: u32,
    pub sustainability: SustainabilityPolicy,
    pub seed: Option<u64>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        let seed = FallbackSeed::default();
        Self {
            reputation_score: seed.reputation_score,
            review_count: seed.review_count,
            sustainability: seed.sustainability,
            seed: seed.seed,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_debug_redacts_api_key() {
        let store = StoreConfig {
            api_key: Some("service-role-secret".into()),
            ..StoreConfig::default()
        };
        assert!(!format!("{store:?}").contains("service-role-secret"));
    }

    #[test]
    fn catalog_settings_carry_fallback_seed() {
        let config = Config {
            store: StoreConfig::default(),
            catalog: CatalogConfig {
                primary_view: "listings_v2".into(),
                ..CatalogConfig::default()
            },
            fallback: FallbackConfig {
                reputation_score: 2.0,
                review_count: 1,
                sustainability: SustainabilityPolicy::Always,
                seed: Some(9),
            },
            dev_mode: false,
            metadata: ConfigMetadata::default(),
        };

        let settings = config.catalog_settings();
        assert_eq!(settings.primary_view, "listings_v2");
        assert_eq!(settings.fallback_collection, "data_assets");
        assert_eq!(settings.fallback.review_count, 1);
        assert_eq!(settings.fallback.seed, Some(9));
        assert!(config.require_store_url().is_err());
    }
}
