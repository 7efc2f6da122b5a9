// ── Runtime configuration ──
//
// Describes *where* the contacts API lives. Built by the embedding
// application and handed to `ContactsController` -- core never reads
// config files.

use std::time::Duration;

use url::Url;

/// Configuration for one contacts-API connection.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// API root (e.g. `https://api.example.com`).
    pub api_url: Url,
    /// Tenant/instance name, a path segment of every request URL.
    pub instance: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl SyncConfig {
    /// Create a config with the default timeout. Both parameters are
    /// required; there is no usable default URL or instance.
    pub fn new(api_url: Url, instance: impl Into<String>) -> Self {
        Self {
            api_url,
            instance: instance.into(),
            timeout: Duration::from_secs(30),
        }
    }
}
