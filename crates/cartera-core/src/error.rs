// ── Core error types ──
//
// Domain-facing errors carried by Fail actions and stored in the state's
// error descriptor. The `From<cartera_api::Error>` impl translates
// transport-layer failures into these variants; errors are plain data
// (cloneable) because the state aggregate holds on to the latest one.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Transport ────────────────────────────────────────────────────
    #[error("Cannot reach the contacts API: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Request timed out")]
    Timeout,

    /// The API reported a failure (non-2xx, or an error envelope).
    #[error("API error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    // ── Data ─────────────────────────────────────────────────────────
    /// A wire record could not be converted into its canonical shape.
    #[error("Malformed record: {field} = {value:?}")]
    MalformedRecord { field: String, value: String },

    /// The create endpoint answered success without a contact identifier.
    #[error("Unknown error: created contact has no identifier")]
    MissingIdentifier,

    // ── Device ───────────────────────────────────────────────────────
    /// The native address-book plugin is not present on this device.
    #[error("The Contacts Plugin is not installed")]
    DeviceUnavailable,

    /// The device query itself failed; carries the plugin's reason verbatim.
    #[error("{0}")]
    Device(String),

    // ── Configuration / internal ─────────────────────────────────────
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<cartera_api::Error> for CoreError {
    fn from(err: cartera_api::Error) -> Self {
        match err {
            cartera_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            cartera_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            cartera_api::Error::Api {
                message,
                status_code,
            } => CoreError::Api {
                message,
                status: status_code,
            },
            cartera_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
            cartera_api::Error::InvalidRequest { message } => CoreError::Validation { message },
        }
    }
}
