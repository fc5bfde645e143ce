//! Credentials for the verification service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix the service expects on usernames derived from an API key.
pub const API_KEY_USERNAME_PREFIX: &str = "apikey-";

/// Exactly one authentication mode is active for a process.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ServiceCredentials {
    UserPassword { username: String, password: String },
    ApiKey { key: String },
}

impl ServiceCredentials {
    pub fn username(&self) -> String {
        match self {
            Self::UserPassword { username, .. } => username.clone(),
            Self::ApiKey { key } => format!("{API_KEY_USERNAME_PREFIX}{key}"),
        }
    }

    /// API-key mode always sends an empty password.
    pub fn password(&self) -> &str {
        match self {
            Self::UserPassword { password, .. } => password,
            Self::ApiKey { .. } => "",
        }
    }

    pub fn is_api_key(&self) -> bool {
        matches!(self, Self::ApiKey { .. })
    }
}

impl Default for ServiceCredentials {
    fn default() -> Self {
        Self::UserPassword {
            username: String::new(),
            password: String::new(),
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for ServiceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserPassword { username, .. } => f
                .debug_struct("UserPassword")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::ApiKey { .. } => f.debug_struct("ApiKey").field("key", &"[REDACTED]").finish(),
        }
    }
}
