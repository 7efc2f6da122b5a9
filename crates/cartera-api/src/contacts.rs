// Contacts API endpoints
//
// One method per domain operation, mapped 1:1 to a transport call.
// Envelope unwrapping happens here; no business logic does.

use serde::Serialize;
use tracing::debug;

use crate::client::ContactsClient;
use crate::error::Error;
use crate::models::{
    ContactForm, ContactRecord, CountryCodeEntry, DeviceContactRecord, ImportResponse,
    InteractionForm, InteractionRecord,
};

/// Wrapper the batch-import endpoint expects inside `export_data`.
#[derive(Serialize)]
struct ExportPayload<'a> {
    contacts: &'a [DeviceContactRecord],
}

impl ContactsClient {
    /// List all contacts.
    ///
    /// `GET {base}`
    pub async fn list_contacts(&self) -> Result<Vec<ContactRecord>, Error> {
        let url = self.contacts_url("")?;
        debug!("listing contacts");
        self.get(url).await?.into_data()
    }

    /// Fetch the static country-calling-code reference asset.
    ///
    /// `GET /assets/countryCodes.json` -- a bare list, no envelope.
    pub async fn country_codes(&self) -> Result<Vec<CountryCodeEntry>, Error> {
        let url = self.asset_url("countryCodes.json")?;
        debug!("fetching country codes");
        self.get_json(url).await
    }

    /// List the interactions logged against one contact.
    ///
    /// `GET {base}/interactions/{id}`
    pub async fn list_interactions(&self, contact_id: i64) -> Result<Vec<InteractionRecord>, Error> {
        let url = self.contacts_url(&format!("interactions/{contact_id}"))?;
        debug!(contact_id, "listing interactions");
        self.get(url).await?.into_data()
    }

    /// Create a contact from a form submission.
    ///
    /// `POST {base}/create` with a URL-encoded body.
    pub async fn create_contact(&self, form: &ContactForm) -> Result<ContactRecord, Error> {
        let url = self.contacts_url("create")?;
        debug!(name = %form.name, "creating contact");
        self.post_form(url, form).await?.into_data()
    }

    /// Update a contact. The identifier is taken from the form payload,
    /// not passed separately.
    ///
    /// `POST {base}/update/{form.id}` with a URL-encoded body.
    pub async fn update_contact(&self, form: &ContactForm) -> Result<ContactRecord, Error> {
        let id = form.id.ok_or_else(|| Error::InvalidRequest {
            message: "update requires a contact identifier in the form payload".into(),
        })?;
        let url = self.contacts_url(&format!("update/{id}"))?;
        debug!(contact_id = id, "updating contact");
        self.post_form(url, form).await?.into_data()
    }

    /// Delete a contact.
    ///
    /// `DELETE {base}/delete/{id}`
    pub async fn delete_contact(&self, contact_id: i64) -> Result<(), Error> {
        let url = self.contacts_url(&format!("delete/{contact_id}"))?;
        debug!(contact_id, "deleting contact");
        self.delete::<serde_json::Value>(url).await?.ensure_success()
    }

    /// Batch-import device contacts.
    ///
    /// `POST {base}/export_from_mobile` with body
    /// `export_data=<JSON-serialized {contacts: [...]}>`.
    pub async fn import_contacts(
        &self,
        contacts: &[DeviceContactRecord],
    ) -> Result<Vec<ContactRecord>, Error> {
        let url = self.contacts_url("export_from_mobile")?;
        debug!(count = contacts.len(), "importing device contacts");

        let payload =
            serde_json::to_string(&ExportPayload { contacts }).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: String::new(),
            })?;

        let response: ImportResponse = self
            .post_form(url, &[("export_data", payload.as_str())])
            .await?
            .into_data()?;

        Ok(response.contacts_exported)
    }

    /// Log an interaction against a contact.
    ///
    /// `POST {base}/create_interaction/{id}` with a URL-encoded body.
    pub async fn create_interaction(
        &self,
        contact_id: i64,
        form: &InteractionForm,
    ) -> Result<InteractionRecord, Error> {
        let url = self.contacts_url(&format!("create_interaction/{contact_id}"))?;
        debug!(contact_id, action = %form.action_type, "creating interaction");
        self.post_form(url, form).await?.into_data()
    }
}
