use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use procuredata_core::catalog::SustainabilityPolicy;
use url::Url;

use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{
    CatalogConfig, Config, ConfigMetadata, DEFAULT_STORE_TIMEOUT_SECS,
    FallbackConfig, StoreConfig,
};
use crate::validation::{self, ConfigWarnings};

pub mod error;

use error::ConfigLoadError;

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] =
    ["procuredata.toml", "config/procuredata.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// Resolves [`Config`] from defaults, an optional TOML file and the
/// environment, in increasing order of precedence.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env`, gather the process environment and compose the config.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        // Like the config path, an explicitly named env file must exist.
        let env_file_loaded = match &self.options.env_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingEnvFile {
                        path: path.clone(),
                    });
                }
                dotenvy::from_path(path)?;
                true
            }
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather()?)?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose the config from an already gathered environment.
    ///
    /// Skips `.env` handling entirely.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) =
            compose_config(file_config, env, config_path)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // An explicitly named file must exist; default locations are optional.
        let (path, required) =
            match (&self.options.config_path, &env.config_path) {
                (Some(explicit), _) => (explicit.clone(), true),
                (None, Some(from_env)) => (from_env.clone(), true),
                (None, None) => match DEFAULT_CONFIG_LOCATIONS
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.exists())
                {
                    Some(found) => (found, false),
                    None => return Ok((None, None)),
                },
            };

        if !path.exists() {
            if required {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Toml {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if config_path.is_none() {
        warnings.push_with_hint(
            "No procuredata.toml detected; using environment variables and defaults",
            "Create procuredata.toml or point PROCUREDATA_CONFIG at one",
        );
    }

    let FileConfig {
        store: file_store,
        catalog: file_catalog,
        fallback: file_fallback,
        dev_mode: file_dev_mode,
    } = file_config.unwrap_or_default();

    let url = env
        .store_url
        .or(file_store.url)
        .map(|raw| parse_store_url(&raw))
        .transpose()?;

    let store = StoreConfig {
        url,
        api_key: env
            .api_key
            .or(file_store.api_key)
            .filter(|key| !key.trim().is_empty()),
        timeout: Duration::from_secs(
            env.timeout_secs
                .or(file_store.timeout_secs)
                .unwrap_or(DEFAULT_STORE_TIMEOUT_SECS),
        ),
    };

    let defaults = CatalogConfig::default();
    let catalog = CatalogConfig {
        primary_view: env
            .primary_view
            .or(file_catalog.primary_view)
            .unwrap_or(defaults.primary_view),
        fallback_collection: file_catalog
            .fallback_collection
            .unwrap_or(defaults.fallback_collection),
        details_collection: file_catalog
            .details_collection
            .unwrap_or(defaults.details_collection),
        organizations_collection: file_catalog
            .organizations_collection
            .unwrap_or(defaults.organizations_collection),
    };

    let sustainability = match env.fallback_sustainability {
        Some(raw) => raw.parse::<SustainabilityPolicy>().map_err(|err| {
            ConfigLoadError::InvalidValue {
                field: "PROCUREDATA_FALLBACK_SUSTAINABILITY",
                reason: err.to_string(),
            }
        })?,
        None => file_fallback.sustainability.unwrap_or_default(),
    };

    let fallback_defaults = FallbackConfig::default();
    let mut reputation_score = env
        .fallback_reputation
        .or(file_fallback.reputation_score)
        .unwrap_or(fallback_defaults.reputation_score);
    if !(0.0..=5.0).contains(&reputation_score) {
        let clamped = if reputation_score.is_nan() {
            fallback_defaults.reputation_score
        } else {
            reputation_score.clamp(0.0, 5.0)
        };
        warnings.push(format!(
            "Fallback reputation score {reputation_score} is outside 0..=5; using {clamped}"
        ));
        reputation_score = clamped;
    }

    let fallback = FallbackConfig {
        reputation_score,
        review_count: env
            .fallback_review_count
            .or(file_fallback.review_count)
            .unwrap_or(fallback_defaults.review_count),
        sustainability,
        seed: env.fallback_seed.or(file_fallback.seed),
    };

    let config = Config {
        store,
        catalog,
        fallback,
        dev_mode: env.dev_mode.or(file_dev_mode).unwrap_or(false),
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    };

    warnings.extend(validation::apply_guard_rails(&config)?);

    Ok((config, warnings))
}

fn parse_store_url(raw: &str) -> Result<Url, ConfigLoadError> {
    let url = Url::parse(raw).map_err(|err| ConfigLoadError::InvalidUrl {
        value: raw.to_string(),
        source: err,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigLoadError::InvalidValue {
            field: "PROCUREDATA_STORE_URL",
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_env() {
        let (config, warnings) =
            compose_config(None, EnvConfig::default(), None).unwrap();

        assert!(config.store.url.is_none());
        assert_eq!(config.store.timeout, Duration::from_secs(10));
        assert_eq!(config.catalog.primary_view, "marketplace_listings");
        assert_eq!(config.fallback.sustainability, SustainabilityPolicy::Random);
        assert!(!config.dev_mode);
        assert_eq!(warnings.items.len(), 2);
    }

    #[test]
    fn env_overrides_file() {
        let file: FileConfig = toml::from_str(
            r#"
            [store]
            url = "https://file.example.com"
            api_key = "file-key"

            [catalog]
            primary_view = "file_view"
            "#,
        )
        .unwrap();
        let env = EnvConfig {
            store_url: Some("https://env.example.com".into()),
            primary_view: Some("env_view".into()),
            ..EnvConfig::default()
        };

        let (config, _) =
            compose_config(Some(file), env, Some("procuredata.toml".into()))
                .unwrap();

        assert_eq!(
            config.store.url.as_ref().map(Url::as_str),
            Some("https://env.example.com/")
        );
        assert_eq!(config.store.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.catalog.primary_view, "env_view");
    }

    #[test]
    fn out_of_range_reputation_is_clamped_with_warning() {
        let env = EnvConfig {
            fallback_reputation: Some(9.0),
            dev_mode: Some(true),
            ..EnvConfig::default()
        };

        let (config, warnings) = compose_config(None, env, None).unwrap();

        assert_eq!(config.fallback.reputation_score, 5.0);
        assert!(
            warnings
                .items
                .iter()
                .any(|w| w.message.contains("outside 0..=5"))
        );
    }

    #[test]
    fn bad_sustainability_env_is_rejected() {
        let env = EnvConfig {
            fallback_sustainability: Some("sometimes".into()),
            ..EnvConfig::default()
        };

        let err = compose_config(None, env, None).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidValue {
                field: "PROCUREDATA_FALLBACK_SUSTAINABILITY",
                ..
            }
        ));
    }

    #[test]
    fn plain_http_remote_store_requires_dev_mode() {
        let env = EnvConfig {
            store_url: Some("http://store.example.com".into()),
            ..EnvConfig::default()
        };
        let err = compose_config(None, env.clone(), None).unwrap_err();
        assert!(matches!(err, ConfigLoadError::GuardRail(_)));

        let dev = EnvConfig {
            dev_mode: Some(true),
            ..env
        };
        assert!(compose_config(None, dev, None).is_ok());

        let local = EnvConfig {
            store_url: Some("http://localhost:54321".into()),
            ..EnvConfig::default()
        };
        assert!(compose_config(None, local, None).is_ok());
    }

    #[test]
    fn invalid_url_is_reported() {
        let env = EnvConfig {
            store_url: Some("not a url".into()),
            ..EnvConfig::default()
        };
        assert!(matches!(
            compose_config(None, env, None),
            Err(ConfigLoadError::InvalidUrl { .. })
        ));
    }
}
