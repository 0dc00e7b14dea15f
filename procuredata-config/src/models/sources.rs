use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use procuredata_core::catalog::SustainabilityPolicy;

use crate::loader::error::ConfigLoadError;
use crate::util::{parse_bool_var, parse_var, string_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub store: FileStoreConfig,
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub fallback: FileFallbackConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStoreConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations_collection: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileFallbackConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation_score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<SustainabilityPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub store_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub primary_view: Option<String>,
    pub fallback_reputation: Option<f32>,
    pub fallback_review_count: Option<u32>,
    /// Kept raw so an unknown policy can be reported instead of ignored.
    pub fallback_sustainability: Option<String>,
    pub fallback_seed: Option<u64>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    /// Read every recognised variable from the process environment.
    ///
    /// Numeric variables that are set but do not parse are errors rather than
    /// silently falling back to the file or default value.
    pub fn gather() -> Result<Self, ConfigLoadError> {
        Ok(Self {
            config_path: string_var("PROCUREDATA_CONFIG").map(PathBuf::from),
            store_url: string_var("PROCUREDATA_STORE_URL"),
            api_key: string_var("PROCUREDATA_API_KEY"),
            timeout_secs: parse_var("PROCUREDATA_STORE_TIMEOUT_SECS")?,
            primary_view: string_var("PROCUREDATA_PRIMARY_VIEW"),
            fallback_reputation: parse_var("PROCUREDATA_FALLBACK_REPUTATION")?,
            fallback_review_count: parse_var(
                "PROCUREDATA_FALLBACK_REVIEW_COUNT",
            )?,
            fallback_sustainability: string_var(
                "PROCUREDATA_FALLBACK_SUSTAINABILITY",
            ),
            fallback_seed: parse_var("PROCUREDATA_FALLBACK_SEED")?,
            dev_mode: parse_bool_var("DEV_MODE"),
        })
    }
}
