// Contacts API HTTP client
//
// Wraps `reqwest::Client` with instance-scoped URL construction and
// envelope unwrapping. The endpoint methods live in `contacts.rs` as
// inherent impls, keeping this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::Envelope;
use crate::transport::TransportConfig;

/// Raw HTTP client for the contacts REST API.
///
/// Handles the `{status, data, message, statusCode}` envelope and
/// instance-scoped URL construction. Every request URL is rooted at
/// `{api_url}/api/{instance}/v1/contacts`, except the static country-code
/// asset which lives under `{api_url}/assets/`.
pub struct ContactsClient {
    http: reqwest::Client,
    api_url: Url,
    instance: String,
}

impl ContactsClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `api_url` is the API root (e.g. `https://api.example.com`);
    /// `instance` is the tenant path segment every contacts URL carries.
    pub fn new(
        api_url: Url,
        instance: impl Into<String>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            api_url,
            instance: instance.into(),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, api_url: Url, instance: impl Into<String>) -> Self {
        Self {
            http,
            api_url,
            instance: instance.into(),
        }
    }

    /// The configured API root.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// The configured instance name.
    pub fn instance(&self) -> &str {
        &self.instance
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a contacts-collection URL: `{api_url}/api/{instance}/v1/contacts/{path}`.
    ///
    /// An empty `path` yields the collection root itself.
    pub(crate) fn contacts_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let full = if path.is_empty() {
            format!("{base}/api/{}/v1/contacts", self.instance)
        } else {
            format!("{base}/api/{}/v1/contacts/{path}", self.instance)
        };
        Ok(Url::parse(&full)?)
    }

    /// Build a static-asset URL: `{api_url}/assets/{path}`.
    pub(crate) fn asset_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.api_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/assets/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET a bare JSON document (no envelope).
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(Error::Transport)?;

        Self::parse_body(resp).await
    }

    /// GET an enveloped payload.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Envelope<T>, Error> {
        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(Error::Transport)?;

        Self::parse_body(resp).await
    }

    /// POST a URL-encoded form body and parse the envelope.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        url: Url,
        form: &impl Serialize,
    ) -> Result<Envelope<T>, Error> {
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .form(form)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(Error::Transport)?;

        Self::parse_body(resp).await
    }

    /// DELETE and parse the envelope.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, url: Url) -> Result<Envelope<T>, Error> {
        debug!("DELETE {url}");

        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(Error::Transport)?;

        Self::parse_body(resp).await
    }

    /// Decode a response body, keeping the raw text around for diagnostics.
    async fn parse_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
