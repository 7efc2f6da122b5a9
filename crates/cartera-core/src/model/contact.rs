// ── Contact record ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use cartera_api::models::ContactForm;

/// Contact classification.
///
/// `ALL` is deliberately not a variant: it only exists as a query value
/// and is modeled by [`KindFilter`] instead, so a stored record can never
/// carry it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactKind {
    #[default]
    NotSpecified,
    Prospect,
    Client,
}

/// Where a contact was first recorded.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactOrigin {
    Manual,
    MobileApp,
    Web,
    WebApp,
    #[default]
    Unknown,
}

/// Classification filter for list queries: everything, or one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    All,
    Only(ContactKind),
}

impl KindFilter {
    pub fn matches(self, kind: ContactKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(k) => k == kind,
        }
    }
}

/// Strip everything but digits, then keep the trailing 10.
///
/// This is the single normalization point for phone numbers; records are
/// normalized once at construction and never again downstream.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let skip = digits.len().saturating_sub(10);
    digits.chars().skip(skip).collect()
}

/// Canonical in-memory contact.
///
/// Every optional wire field is defaulted at construction (empty string,
/// or the stated country defaults), so downstream code can treat the
/// record as fully populated. Mutation is by replacement only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Server-assigned identifier; `None` until the contact is created.
    pub id: Option<i64>,
    pub name: String,
    pub last_name: String,
    pub kind: ContactKind,
    pub origin: ContactOrigin,
    pub email: String,
    /// Digits only, at most 10 characters. See [`normalize_phone`].
    pub phone: String,
    pub country_code: String,
    pub phone_code: String,
    pub street_address: String,
    pub city: String,
    pub state_iso: String,
    /// Opaque server timestamp, never parsed.
    pub created_at: String,
    pub updated_at: String,
}

pub(crate) const DEFAULT_COUNTRY_CODE: &str = "MEX";
pub(crate) const DEFAULT_PHONE_CODE: &str = "+52";

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_owned()
    } else {
        value
    }
}

impl Contact {
    /// An unsaved, blank contact for seeding create forms.
    pub fn empty() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
            phone_code: DEFAULT_PHONE_CODE.to_owned(),
            ..Self::default()
        }
    }

    /// Build a contact from a create/update form submission.
    ///
    /// Unrecognized classification tags fall back to the defaults, the
    /// same policy the wire conversion applies.
    pub fn from_form(form: &ContactForm) -> Self {
        Self {
            id: form.id,
            name: form.name.clone(),
            last_name: form.last_name.clone(),
            kind: form.kind.parse().unwrap_or_default(),
            origin: ContactOrigin::default(),
            email: form.email.clone().unwrap_or_default(),
            phone: normalize_phone(form.phone.as_deref().unwrap_or_default()),
            country_code: or_default(form.country_code.clone(), DEFAULT_COUNTRY_CODE),
            phone_code: or_default(form.phone_code.clone(), DEFAULT_PHONE_CODE),
            street_address: form.street_address.clone().unwrap_or_default(),
            city: form.city.clone().unwrap_or_default(),
            state_iso: form.state_iso.clone().unwrap_or_default(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    /// Project the record back into wire field names for an outbound
    /// request. Server-managed fields (origin, timestamps) are omitted.
    pub fn to_form(&self) -> ContactForm {
        ContactForm {
            id: self.id,
            contact_id: None,
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            kind: self.kind.to_string(),
            country_code: self.country_code.clone(),
            phone_code: self.phone_code.clone(),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
            street_address: Some(self.street_address.clone()),
            city: Some(self.city.clone()),
            state_iso: Some(self.state_iso.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_non_digits_and_keeps_last_ten() {
        assert_eq!(normalize_phone("+52 (555) 478-7672"), "5554787672");
        assert_eq!(normalize_phone("525554787672"), "5554787672");
        assert_eq!(normalize_phone("12345"), "12345");
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("abc"), "");
    }

    #[test]
    fn normalized_phone_is_short_and_numeric() {
        for raw in ["+52 1 555 478 7672", "tel: 8-88-55-555-12", "x", "0000000000000"] {
            let phone = normalize_phone(raw);
            assert!(phone.len() <= 10);
            assert!(phone.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn empty_contact_carries_the_stated_defaults() {
        let contact = Contact::empty();

        assert_eq!(contact.id, None);
        assert_eq!(contact.name, "");
        assert_eq!(contact.kind, ContactKind::NotSpecified);
        assert_eq!(contact.origin, ContactOrigin::Unknown);
        assert_eq!(contact.country_code, "MEX");
        assert_eq!(contact.phone_code, "+52");
        assert_eq!(contact.email, "");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.street_address, "");
        assert_eq!(contact.city, "");
        assert_eq!(contact.state_iso, "");
        assert_eq!(contact.created_at, "");
        assert_eq!(contact.updated_at, "");
    }

    #[test]
    fn from_form_normalizes_phone_and_defaults_blanks() {
        let form = ContactForm {
            name: "María".into(),
            last_name: "García".into(),
            kind: "CLIENT".into(),
            country_code: String::new(),
            phone_code: String::new(),
            phone: Some("+52 (555) 123-4567".into()),
            ..ContactForm::default()
        };

        let contact = Contact::from_form(&form);

        assert_eq!(contact.kind, ContactKind::Client);
        assert_eq!(contact.phone, "5551234567");
        assert_eq!(contact.country_code, "MEX");
        assert_eq!(contact.phone_code, "+52");
        assert_eq!(contact.email, "");
    }

    #[test]
    fn from_form_falls_back_on_unknown_kind() {
        let form = ContactForm {
            kind: "ALL".into(),
            ..ContactForm::default()
        };
        assert_eq!(Contact::from_form(&form).kind, ContactKind::NotSpecified);
    }

    #[test]
    fn kind_filter_all_matches_everything() {
        assert!(KindFilter::All.matches(ContactKind::Client));
        assert!(KindFilter::All.matches(ContactKind::Prospect));
        assert!(KindFilter::Only(ContactKind::Client).matches(ContactKind::Client));
        assert!(!KindFilter::Only(ContactKind::Client).matches(ContactKind::Prospect));
    }
}
