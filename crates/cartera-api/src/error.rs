use thiserror::Error;

/// Top-level error type for the `cartera-api` crate.
///
/// Covers every failure mode of the HTTP surface: transport, URL
/// construction, the API's error envelope, and payload decoding.
/// `cartera-core` maps these into domain-facing variants.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, non-2xx
    /// status, etc.) -- carries the raw `reqwest` error unchanged.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API envelope ────────────────────────────────────────────────
    /// The API answered with an `{status: "error"}` envelope.
    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The caller handed us a request we cannot encode (e.g. an update
    /// form without an identifier).
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// The HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }
}
