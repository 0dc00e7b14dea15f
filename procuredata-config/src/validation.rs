use thiserror::Error;

use super::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error(
        "store URL {url} uses plain HTTP for a non-local host while DEV_MODE is false"
    )]
    InsecureStoreUrl { url: String },
    #[error("store timeout must be at least one second")]
    ZeroTimeout,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.store.timeout.is_zero() {
        return Err(ConfigGuardRailError::ZeroTimeout);
    }

    match &config.store.url {
        Some(url) => {
            let local = matches!(
                url.host_str(),
                Some("localhost") | Some("127.0.0.1") | Some("::1") | Some("[::1]")
            );
            if !config.dev_mode && url.scheme() == "http" && !local {
                return Err(ConfigGuardRailError::InsecureStoreUrl {
                    url: url.to_string(),
                });
            }
            if config.store.api_key.is_none() {
                warnings.push_with_hint(
                    "PROCUREDATA_API_KEY not configured; requests will be sent anonymously",
                    "Set PROCUREDATA_API_KEY or add api_key to the [store] section",
                );
            }
        }
        None => warnings.push_with_hint(
            "No store URL configured; only demo mode is available",
            "Set PROCUREDATA_STORE_URL or add url to the [store] section",
        ),
    }

    Ok(warnings)
}
