// ── Wire-to-domain conversions ──
//
// Bridges raw `cartera_api` records into canonical `cartera_core::model`
// types. Identifiers arrive as strings and must parse; classification tags
// fall back to their defaults when the server sends something unexpected.

use cartera_api::models::{ContactRecord, InteractionRecord};

use crate::error::CoreError;
use crate::model::contact::{
    Contact, ContactKind, ContactOrigin, DEFAULT_COUNTRY_CODE, DEFAULT_PHONE_CODE, normalize_phone,
};
use crate::model::interaction::{Interaction, InteractionKind};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse a required string identifier, naming the offending field on failure.
fn parse_id(field: &str, raw: &str) -> Result<i64, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::MalformedRecord {
            field: field.to_owned(),
            value: raw.to_owned(),
        })
}

fn or_default(raw: Option<String>, default: &str) -> String {
    match raw {
        Some(v) if !v.is_empty() => v,
        _ => default.to_owned(),
    }
}

// ── Contact ────────────────────────────────────────────────────────

impl TryFrom<ContactRecord> for Contact {
    type Error = CoreError;

    fn try_from(r: ContactRecord) -> Result<Self, Self::Error> {
        let id = parse_id("id", &r.id)?;

        Ok(Contact {
            id: Some(id),
            name: r.name.unwrap_or_default(),
            last_name: r.last_name.unwrap_or_default(),
            kind: r
                .kind
                .as_deref()
                .and_then(|k| k.parse::<ContactKind>().ok())
                .unwrap_or_default(),
            origin: r
                .origin
                .as_deref()
                .and_then(|o| o.parse::<ContactOrigin>().ok())
                .unwrap_or_default(),
            email: r.email.unwrap_or_default(),
            phone: normalize_phone(&r.phone.unwrap_or_default()),
            country_code: or_default(r.country_code, DEFAULT_COUNTRY_CODE),
            phone_code: or_default(r.phone_code, DEFAULT_PHONE_CODE),
            street_address: r.street_address.unwrap_or_default(),
            city: r.city.unwrap_or_default(),
            state_iso: r.state_iso.unwrap_or_default(),
            created_at: r.created_at.unwrap_or_default(),
            updated_at: r.updated_at.unwrap_or_default(),
        })
    }
}

// ── Interaction ────────────────────────────────────────────────────

impl TryFrom<InteractionRecord> for Interaction {
    type Error = CoreError;

    fn try_from(r: InteractionRecord) -> Result<Self, Self::Error> {
        Ok(Interaction {
            id: parse_id("id", &r.id)?,
            contact_id: parse_id("contact_id", &r.contact_id)?,
            entity: r.entity.unwrap_or_default(),
            entity_id: parse_id("entity_id", &r.entity_id)?,
            kind: r
                .action_type
                .as_deref()
                .and_then(|k| k.parse::<InteractionKind>().ok())
                .unwrap_or(InteractionKind::Create),
            created_at: r.created_at.unwrap_or_default(),
            display_text: r.display_text.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cartera_api::models::{ContactRecord, InteractionRecord};

    fn record(id: &str) -> ContactRecord {
        ContactRecord {
            id: id.into(),
            name: Some("Daniel".into()),
            last_name: Some("Higgins".into()),
            kind: Some("PROSPECT".into()),
            origin: Some("MOBILE_APP".into()),
            email: Some("d-higgins@mac.com".into()),
            phone: Some("+52 555 478 7672".into()),
            country_code: Some("MEX".into()),
            phone_code: Some("+52".into()),
            created_at: Some("2020-07-23 10:29:59".into()),
            updated_at: Some("2020-07-23 10:29:59".into()),
            ..ContactRecord::default()
        }
    }

    #[test]
    fn contact_record_converts_and_normalizes() {
        let contact = Contact::try_from(record("9")).unwrap();

        assert_eq!(contact.id, Some(9));
        assert_eq!(contact.kind, ContactKind::Prospect);
        assert_eq!(contact.origin, ContactOrigin::MobileApp);
        assert_eq!(contact.phone, "5554787672");
        assert_eq!(contact.state_iso, "");
    }

    #[test]
    fn unparseable_contact_id_is_an_error() {
        let result = Contact::try_from(record("not-a-number"));
        assert!(matches!(
            result,
            Err(CoreError::MalformedRecord { ref field, .. }) if field == "id"
        ));
    }

    #[test]
    fn unknown_tags_fall_back_to_defaults() {
        let mut r = record("1");
        r.kind = Some("VIP".into());
        r.origin = None;

        let contact = Contact::try_from(r).unwrap();
        assert_eq!(contact.kind, ContactKind::NotSpecified);
        assert_eq!(contact.origin, ContactOrigin::Unknown);
    }

    #[test]
    fn round_trip_preserves_wire_fields() {
        let contact = Contact::try_from(record("9")).unwrap();
        let form = contact.to_form();

        assert_eq!(form.id, Some(9));
        assert_eq!(form.name, "Daniel");
        assert_eq!(form.last_name, "Higgins");
        assert_eq!(form.kind, "PROSPECT");
        assert_eq!(form.phone.as_deref(), Some("5554787672"));
        assert_eq!(form.email.as_deref(), Some("d-higgins@mac.com"));
        assert_eq!(form.country_code, "MEX");
        assert_eq!(form.phone_code, "+52");
    }

    #[test]
    fn interaction_record_converts() {
        let r = InteractionRecord {
            id: "11".into(),
            contact_id: "7".into(),
            entity: Some("appointment".into()),
            entity_id: "4".into(),
            action_type: Some("CONTACT_SCHEDULED".into()),
            created_at: Some("2020-10-26 17:33:18".into()),
            display_text: None,
        };

        let interaction = Interaction::try_from(r).unwrap();

        assert_eq!(interaction.id, 11);
        assert_eq!(interaction.contact_id, 7);
        assert_eq!(interaction.kind, InteractionKind::ContactScheduled);
        assert_eq!(interaction.display_text, "");
    }

    #[test]
    fn interaction_with_bad_entity_id_is_an_error() {
        let r = InteractionRecord {
            id: "11".into(),
            contact_id: "7".into(),
            entity_id: String::new(),
            ..InteractionRecord::default()
        };

        assert!(matches!(
            Interaction::try_from(r),
            Err(CoreError::MalformedRecord { ref field, .. }) if field == "entity_id"
        ));
    }
}
