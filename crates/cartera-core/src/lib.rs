//! Reconciliation core for the Cartera contacts module.
//!
//! This crate turns three asynchronous data sources -- the remote REST
//! API, the device address book, and caller intents -- into deterministic
//! state transitions over one in-memory aggregate:
//!
//! - **[`ContactsController`]** — Composition facade managing the full
//!   lifecycle: builds the HTTP client from a [`SyncConfig`], wires the
//!   service and store together, and [`start()`](ContactsController::start)
//!   spawns the effect engine. [`shutdown()`](ContactsController::shutdown)
//!   cancels in-flight work and joins it.
//!
//! - **[`ContactStore`]** — The single source of truth: a
//!   `tokio::sync::watch` cell holding an `Arc<ContactState>`, written only
//!   by the reducer, read through pure selectors ([`store::select`]) and
//!   the [`StateStream`] subscription handle.
//!
//! - **[`Action`]** — The closed intent/outcome vocabulary. Every `*Begin`
//!   intent produces exactly one `*Success` or `*Fail` terminal action,
//!   unless a newer Begin of the same operation supersedes it
//!   (last-request-wins).
//!
//! - **[`ContactsService`]** — The eight domain operations, composing the
//!   repository client and the native device adapter with business rules:
//!   sorting, country-code fallback, de-duplication against known
//!   contacts, and create-response validation.
//!
//! - **Domain model** ([`model`]) — Canonical [`Contact`] and
//!   [`Interaction`] shapes with their defaulting rules, independent of
//!   wire and device formats.

pub mod action;
pub mod config;
pub mod controller;
pub mod convert;
pub mod device;
mod effects;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use action::{Action, Operation};
pub use config::SyncConfig;
pub use controller::ContactsController;
pub use device::{DeviceContactsProvider, DeviceField, DeviceFindOptions, NativeContacts};
pub use error::CoreError;
pub use service::ContactsService;
pub use store::{ContactState, ContactStore, StateError, StateStream, StateSuccess};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Contact, ContactKind, ContactOrigin, CountryCodeEntry, Interaction, InteractionKind,
    KindFilter, fallback_country_codes, normalize_phone,
};

// Wire-level types callers construct directly (forms, device records).
pub use cartera_api::models::{
    ContactForm, DeviceContactField, DeviceContactName, DeviceContactRecord, InteractionForm,
};
