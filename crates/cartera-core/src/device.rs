// ── Native device address-book adapter ──
//
// Wraps the platform contact-picker behind an async contract with
// explicit plugin-absence handling. The platform side implements
// `DeviceContactsProvider`; everything above it speaks canonical types.

use std::sync::Arc;

use futures_util::future::BoxFuture;

use cartera_api::models::DeviceContactRecord;

use crate::error::CoreError;

/// Which device-record fields a query should populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceField {
    DisplayName,
    Name,
    PhoneNumbers,
    Emails,
}

/// Options for a device address-book query.
#[derive(Debug, Clone, Default)]
pub struct DeviceFindOptions {
    /// Free-text filter passed through to the platform picker.
    pub filter: Option<String>,
    /// Return every match rather than the first.
    pub multiple: bool,
}

/// Platform-side contact-picker contract.
///
/// Errors are the platform's rejection reason, surfaced verbatim.
pub trait DeviceContactsProvider: Send + Sync {
    fn find(
        &self,
        fields: &[DeviceField],
        options: DeviceFindOptions,
    ) -> BoxFuture<'static, Result<Vec<DeviceContactRecord>, String>>;
}

/// Device adapter with normalized plugin-absence semantics.
///
/// Built [`unavailable`](Self::unavailable) when no platform provider is
/// registered; every query then fails with
/// [`CoreError::DeviceUnavailable`] instead of panicking at the FFI seam.
#[derive(Clone)]
pub struct NativeContacts {
    provider: Option<Arc<dyn DeviceContactsProvider>>,
}

impl NativeContacts {
    pub fn new(provider: Arc<dyn DeviceContactsProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// An adapter with no platform plugin behind it.
    pub fn unavailable() -> Self {
        Self { provider: None }
    }

    fn provider(&self) -> Result<&Arc<dyn DeviceContactsProvider>, CoreError> {
        self.provider.as_ref().ok_or(CoreError::DeviceUnavailable)
    }

    /// Query the device address book once, returning raw records.
    ///
    /// Queries display name, name structure, and phone numbers, with
    /// `multiple = true`.
    pub async fn load_raw(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<DeviceContactRecord>, CoreError> {
        let provider = self.provider()?;

        let fields = [
            DeviceField::DisplayName,
            DeviceField::Name,
            DeviceField::PhoneNumbers,
        ];
        let options = DeviceFindOptions {
            filter: filter.map(str::to_owned),
            multiple: true,
        };

        provider
            .find(&fields, options)
            .await
            .map_err(CoreError::Device)
    }

    /// Find the first device contact whose phone number -- digits only --
    /// equals `phone` exactly, or `None` when nothing matches.
    pub async fn pick_one(&self, phone: &str) -> Result<Option<DeviceContactRecord>, CoreError> {
        let provider = self.provider()?;

        let options = DeviceFindOptions {
            filter: None,
            multiple: true,
        };

        let records = provider
            .find(&[DeviceField::PhoneNumbers], options)
            .await
            .map_err(CoreError::Device)?;

        Ok(records.into_iter().find(|record| {
            record
                .phone_numbers
                .iter()
                .flatten()
                .any(|p| digits(&p.value) == phone)
        }))
    }
}

/// Strip every non-digit character. Unlike
/// [`normalize_phone`](crate::model::normalize_phone) this keeps the full
/// length; `pick_one` matches on the caller's exact input.
fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
