// ── Domain service ──
//
// Composes the repository client, the native device adapter, and a store
// snapshot into the eight operations the effect engine invokes. Business
// rules (sorting, fallbacks, de-duplication, validation) live here and
// nowhere else. Fail-loud: nothing is caught; the effect engine is the
// recovery boundary.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use cartera_api::ContactsClient;
use cartera_api::models::{
    ContactForm, CountryCodeEntry, DeviceContactRecord, InteractionForm,
};

use crate::device::NativeContacts;
use crate::error::CoreError;
use crate::model::{
    Contact, ContactKind, Interaction, fallback_country_codes, normalize_phone,
};
use crate::store::ContactState;

pub struct ContactsService {
    client: ContactsClient,
    device: NativeContacts,
    /// Latest-snapshot read of the store; never awaited on.
    state: watch::Receiver<Arc<ContactState>>,
}

impl ContactsService {
    pub fn new(
        client: ContactsClient,
        device: NativeContacts,
        state: watch::Receiver<Arc<ContactState>>,
    ) -> Self {
        Self {
            client,
            device,
            state,
        }
    }

    // ── Remote reads ─────────────────────────────────────────────────

    /// Fetch the full contact list, newest (highest id) first.
    pub async fn load_remote_contacts(&self) -> Result<Vec<Contact>, CoreError> {
        let records = self.client.list_contacts().await?;

        let mut contacts = records
            .into_iter()
            .map(Contact::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        contacts.sort_by(|a, b| b.id.cmp(&a.id));

        debug!(count = contacts.len(), "loaded remote contacts");
        Ok(contacts)
    }

    /// Fetch the country-code reference list, sorted by display name.
    ///
    /// An *empty* success falls back to the static 3-entry list; an error
    /// propagates unchanged -- only empty success triggers the fallback.
    pub async fn load_country_codes(&self) -> Result<Vec<CountryCodeEntry>, CoreError> {
        let mut codes = self.client.country_codes().await?;

        if codes.is_empty() {
            debug!("country-code asset empty, using static fallback");
            return Ok(fallback_country_codes());
        }

        codes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(codes)
    }

    /// Fetch the interactions logged against a contact, in server order.
    pub async fn load_contact_interactions(
        &self,
        contact_id: i64,
    ) -> Result<Vec<Interaction>, CoreError> {
        let records = self.client.list_interactions(contact_id).await?;

        records
            .into_iter()
            .map(Interaction::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    // ── Device reads ─────────────────────────────────────────────────

    /// Raw device records, straight from the native adapter.
    pub async fn load_raw_native_contacts(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<DeviceContactRecord>, CoreError> {
        self.device.load_raw(filter).await
    }

    /// The first device contact matching `phone` exactly (digits only).
    pub async fn pick_one(&self, phone: &str) -> Result<Option<DeviceContactRecord>, CoreError> {
        self.device.pick_one(phone).await
    }

    /// Device contacts shaped for display and import.
    ///
    /// This is the de-duplication boundary between the device address
    /// book and already-known contacts: records without a given name, or
    /// whose phone number is already present in the store, are dropped.
    /// Results are sorted by given name and carry no identifier.
    pub async fn load_formatted_native_contacts(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<Contact>, CoreError> {
        let mut records = self.device.load_raw(filter).await?;

        // Latest snapshot, read once -- not a subscription.
        let known_phones: HashSet<String> = self
            .state
            .borrow()
            .items
            .iter()
            .map(|c| c.phone.clone())
            .collect();

        records.retain(|record| {
            !record.given_name().is_empty()
                && !known_phones.contains(&normalize_phone(record.primary_phone()))
        });
        records.sort_by(|a, b| a.given_name().cmp(b.given_name()));

        Ok(records
            .into_iter()
            .map(|record| Contact {
                id: None,
                name: record.given_name().to_owned(),
                last_name: record.family_name().to_owned(),
                kind: ContactKind::NotSpecified,
                email: record.primary_email().to_owned(),
                phone: normalize_phone(record.primary_phone()),
                ..Contact::empty()
            })
            .collect())
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Create a contact. A success response without an identifier is a
    /// domain-validation failure, distinct from transport errors.
    pub async fn create_contact(&self, form: &ContactForm) -> Result<Contact, CoreError> {
        let record = self.client.create_contact(form).await?;

        if record.id.trim().is_empty() {
            return Err(CoreError::MissingIdentifier);
        }

        Contact::try_from(record)
    }

    /// Update a contact. The returned record is mapped without the
    /// identifier check `create_contact` applies.
    pub async fn update_contact(&self, form: &ContactForm) -> Result<Contact, CoreError> {
        let record = self.client.update_contact(form).await?;
        Contact::try_from(record)
    }

    /// Delete a contact, resolving to the deleted identifier.
    ///
    /// A non-success envelope raises like every other operation does.
    pub async fn delete_contact(&self, contact_id: i64) -> Result<i64, CoreError> {
        self.client.delete_contact(contact_id).await?;
        Ok(contact_id)
    }

    /// Batch-import device contacts, preserving server-assigned order.
    pub async fn import_contacts(
        &self,
        contacts: &[DeviceContactRecord],
    ) -> Result<Vec<Contact>, CoreError> {
        let records = self.client.import_contacts(contacts).await?;

        records
            .into_iter()
            .map(Contact::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    /// Log an interaction against a contact.
    pub async fn create_interaction(
        &self,
        contact_id: i64,
        form: &InteractionForm,
    ) -> Result<Interaction, CoreError> {
        let record = self.client.create_interaction(contact_id, form).await?;
        Interaction::try_from(record)
    }
}
