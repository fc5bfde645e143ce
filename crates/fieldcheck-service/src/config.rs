//! Process-wide configuration for the verification service.
//!
//! Configuration is loaded once (from a JSON file plus environment overrides),
//! installed with [`init`], and read-only afterwards. Callers pass the
//! `&ServiceConfig` explicitly into the client and normalizer rather than
//! reading it ambiently.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use fieldcheck_model::{DEFAULT_APPLICATION_TAG, ServiceCredentials};

use crate::error::{ConfigError, Result};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOCALE: &str = "en-GB";

pub const ENV_ENDPOINT: &str = "FIELDCHECK_ENDPOINT";
pub const ENV_USERNAME: &str = "FIELDCHECK_USERNAME";
pub const ENV_PASSWORD: &str = "FIELDCHECK_PASSWORD";
pub const ENV_API_KEY: &str = "FIELDCHECK_API_KEY";
pub const ENV_DEFAULT_COUNTRY: &str = "FIELDCHECK_DEFAULT_COUNTRY";

static CONFIG: OnceLock<ServiceConfig> = OnceLock::new();

/// Settings shared by every normalize and validate call in the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the verification service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Missing credentials are not an error here; calls fail at the service.
    #[serde(default)]
    pub credentials: ServiceCredentials,

    /// Process-wide default country for phone numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_country: Option<String>,

    /// Sent with phone formatting requests.
    #[serde(default = "default_application_tag")]
    pub application_tag: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Locale for name casing.
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_application_tag() -> String {
    DEFAULT_APPLICATION_TAG.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            credentials: ServiceCredentials::default(),
            default_country: None,
            application_tag: default_application_tag(),
            timeout_secs: default_timeout_secs(),
            locale: default_locale(),
        }
    }
}

impl ServiceConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `FIELDCHECK_*` overrides from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. An API key selects API-key mode;
    /// otherwise a username or password switches to username/password mode,
    /// keeping any part not overridden.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(country) = lookup(ENV_DEFAULT_COUNTRY) {
            self.default_country = Some(country);
        }

        if let Some(key) = lookup(ENV_API_KEY) {
            self.credentials = ServiceCredentials::ApiKey { key };
        } else {
            let username = lookup(ENV_USERNAME);
            let password = lookup(ENV_PASSWORD);
            if username.is_some() || password.is_some() {
                let (current_user, current_password) = match &self.credentials {
                    ServiceCredentials::UserPassword { username, password } => {
                        (username.clone(), password.clone())
                    }
                    ServiceCredentials::ApiKey { .. } => (String::new(), String::new()),
                };
                self.credentials = ServiceCredentials::UserPassword {
                    username: username.unwrap_or(current_user),
                    password: password.unwrap_or(current_password),
                };
            }
        }
        self
    }
}

/// Install the process configuration. Fails if already installed.
pub fn init(config: ServiceConfig) -> Result<&'static ServiceConfig> {
    let mut installed = false;
    let current = CONFIG.get_or_init(|| {
        installed = true;
        config
    });
    if installed {
        tracing::debug!(
            endpoint = %current.endpoint,
            api_key = current.credentials.is_api_key(),
            "service configuration initialized"
        );
        Ok(current)
    } else {
        Err(ConfigError::AlreadyInitialized)
    }
}

/// The installed process configuration, if any.
pub fn get() -> Option<&'static ServiceConfig> {
    CONFIG.get()
}
