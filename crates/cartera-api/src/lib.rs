//! Async HTTP client for the Cartera contacts REST API.
//!
//! This crate owns the transport layer: URL construction, form-encoded
//! request bodies, and the `{status, data, message, statusCode}` response
//! envelope every endpoint (except the static country-code asset) is wrapped
//! in. All methods return unwrapped `data` payloads -- the envelope is
//! stripped before the caller sees it.
//!
//! Business rules (sorting, de-duplication, fallbacks, validation) live in
//! `cartera-core`; this crate translates each domain operation 1:1 into a
//! transport call and nothing more.

pub mod client;
mod contacts;
pub mod error;
pub mod models;
pub mod transport;

pub use client::ContactsClient;
pub use error::Error;
pub use models::{
    ContactForm, ContactRecord, CountryCodeEntry, DeviceContactField, DeviceContactName,
    DeviceContactRecord, Envelope, InteractionForm, InteractionRecord, ResponseStatus,
};
pub use transport::TransportConfig;
