//! # Client configuration (`apex.toml`)
//!
//! Defines the optional TOML file the desktop build reads from the user's
//! config directory (filename: [`ApexConfig::filename`] = `"apex.toml"`).
//! The web build runs with [`ApexConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api"
//! strict_envelopes = false   # reject unknown response envelopes
//! scope_to_user = true       # send ?userId= on account listings
//!
//! [dashboard]
//! ad_rotation_secs = 6
//! ```
//!
//! All structs derive or implement `Default` so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Backend origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Top-level configuration stored in `apex.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApexConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Treat an unrecognized list envelope as an error instead of an empty list.
    #[serde(default)]
    pub strict_envelopes: bool,
    /// Pass the session's user id as `?userId=` when listing accounts.
    #[serde(default = "default_true")]
    pub scope_to_user: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            strict_envelopes: false,
            scope_to_user: true,
        }
    }
}

/// Dashboard presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Seconds between advertisement slides. 0 disables rotation.
    #[serde(default = "default_ad_rotation")]
    pub ad_rotation_secs: u32,
}

fn default_ad_rotation() -> u32 {
    6
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ad_rotation_secs: default_ad_rotation(),
        }
    }
}

impl ApexConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                ..ApiConfig::default()
            },
            dashboard: DashboardConfig::default(),
        }
    }

    /// Builder method to switch strict envelope handling on or off.
    pub fn with_strict_envelopes(mut self, strict: bool) -> Self {
        self.api.strict_envelopes = strict;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "apex.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
