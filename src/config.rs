//! Client configuration.

use std::env;
use std::fmt;

use crate::error::{OrsError, OrsResult};

pub const ORS_API_URL: &str = "https://api.openrouteservice.org";

pub const API_KEY_VAR: &str = "OPENROUTESERVICE_API_KEY";
pub const BASE_URL_VAR: &str = "OPENROUTESERVICE_BASE_URL";

#[derive(Clone)]
pub struct OrsConfig {
    pub base_url: String,
    pub api_key: String,
    /// Whole-request timeout; `None` waits as long as the transport does.
    pub timeout_secs: Option<u64>,
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: ORS_API_URL.to_string(),
            api_key: String::new(),
            timeout_secs: None,
        }
    }
}

impl OrsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Reads the API key (and optionally a base URL) from the environment.
    pub fn from_env() -> OrsResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from `lookup`, which maps a variable name to its value.
    ///
    /// A missing or blank API key fails with [`OrsError::MissingApiKey`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> OrsResult<Self> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(OrsError::MissingApiKey)?;
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| ORS_API_URL.to_string());

        Ok(Self {
            base_url,
            api_key,
            timeout_secs: None,
        })
    }
}

impl fmt::Debug for OrsConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("OrsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
