// Wire-format types for the contacts REST API.
//
// Field names mirror the JSON the server speaks (snake_case for API
// records, camelCase for device-plugin records). Identifiers arrive as
// strings; parsing them into numbers is `cartera-core`'s job.

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ── Response envelope ──────────────────────────────────────────────

/// Envelope status discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The `{status, data, message, statusCode}` wrapper returned by every
/// endpoint except the static country-code asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: ResponseStatus,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "statusCode")]
    pub status_code: Option<u16>,
}

impl<T> Envelope<T> {
    /// Check the envelope status, discarding any payload.
    pub fn ensure_success(self) -> Result<(), Error> {
        match self.status {
            ResponseStatus::Success => Ok(()),
            ResponseStatus::Error => Err(self.into_api_error()),
        }
    }

    /// Unwrap the `data` payload of a success envelope.
    pub fn into_data(self) -> Result<T, Error> {
        match self.status {
            ResponseStatus::Success => self.data.ok_or_else(|| Error::Deserialization {
                message: "success envelope is missing its data payload".into(),
                body: String::new(),
            }),
            ResponseStatus::Error => Err(self.into_api_error()),
        }
    }

    fn into_api_error(self) -> Error {
        Error::Api {
            message: self
                .message
                .unwrap_or_else(|| "the API reported an error".into()),
            status_code: self.status_code,
        }
    }
}

// ── Contact records ────────────────────────────────────────────────

/// A contact as the server sends it. Identifiers and the classification
/// tags are plain strings on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub phone_code: Option<String>,
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_iso: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Create/update submission. Serialized straight into a URL-encoded body,
/// so field names here ARE the wire field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
    pub name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub country_code: String,
    pub phone_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_iso: Option<String>,
}

/// Payload of the batch-import endpoint's success envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportResponse {
    #[serde(default)]
    pub contacts_exported: Vec<ContactRecord>,
}

// ── Interaction records ────────────────────────────────────────────

/// A logged interaction as the server sends it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub contact_id: String,
    #[serde(default)]
    pub entity: Option<String>,
    #[serde(default)]
    pub entity_id: String,
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub display_text: Option<String>,
}

/// Interaction submission, form-encoded into the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionForm {
    pub action_type: String,
    pub entity: String,
    pub entity_id: i64,
}

// ── Country reference data ─────────────────────────────────────────

/// One entry of the country-calling-code reference asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryCodeEntry {
    pub name: String,
    #[serde(default)]
    pub translations: Translations,
    #[serde(default)]
    pub flag: String,
    #[serde(default, rename = "alpha3Code")]
    pub alpha3_code: String,
    #[serde(default, rename = "callingCodes")]
    pub calling_codes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Translations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub es: Option<String>,
}

// ── Device-plugin records ──────────────────────────────────────────

/// A raw contact as the device address-book plugin reports it, and the
/// shape the batch-import endpoint expects inside `export_data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceContactRecord {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<DeviceContactName>,
    #[serde(default)]
    pub phone_numbers: Option<Vec<DeviceContactField>>,
    #[serde(default)]
    pub emails: Option<Vec<DeviceContactField>>,
    #[serde(default)]
    pub addresses: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default, rename = "client_type")]
    pub client_type: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceContactName {
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub formatted: Option<String>,
}

/// One multi-valued device field (phone number, email).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceContactField {
    pub value: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pref: Option<bool>,
}

impl DeviceContactRecord {
    /// The given name, or `""` when the device reported no name structure.
    pub fn given_name(&self) -> &str {
        self.name
            .as_ref()
            .and_then(|n| n.given_name.as_deref())
            .unwrap_or("")
    }

    /// The family name, or `""`.
    pub fn family_name(&self) -> &str {
        self.name
            .as_ref()
            .and_then(|n| n.family_name.as_deref())
            .unwrap_or("")
    }

    /// The first phone number, or `""`.
    pub fn primary_phone(&self) -> &str {
        self.phone_numbers
            .as_deref()
            .and_then(|p| p.first())
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// The first email, or `""`.
    pub fn primary_email(&self) -> &str {
        self.emails
            .as_deref()
            .and_then(|e| e.first())
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }
}
