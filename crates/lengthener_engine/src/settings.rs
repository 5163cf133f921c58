use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Environment variable holding the API base address.
pub const API_URL_ENV: &str = "LENGTHENER_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid API base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ApiSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. A missing or blank
    /// `LENGTHENER_API_URL` falls back to the local development address.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let base_url = lookup(API_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let settings = Self {
            base_url,
            ..Self::default()
        };
        settings.endpoint(crate::LENGTHEN_PATH)?;
        Ok(settings)
    }

    /// Joins `path` onto the base address, ignoring trailing slashes on the base.
    pub fn endpoint(&self, path: &str) -> Result<Url, SettingsError> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|source| SettingsError::InvalidBaseUrl {
            value: self.base_url.clone(),
            source,
        })
    }
}
