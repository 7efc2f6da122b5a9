// ── Action vocabulary ──
//
// The finite set of intents and outcomes exchanged between callers, the
// effect engine, and the reducer. One closed enum: exhaustive matching in
// both the reducer and the effect dispatch keeps the "every Begin has
// exactly one terminal outcome" contract visible at compile time.

use strum::Display;

use cartera_api::models::{ContactForm, CountryCodeEntry, DeviceContactRecord, InteractionForm};

use crate::error::CoreError;
use crate::model::{Contact, Interaction, KindFilter};

/// Which domain operation an error or success descriptor refers to.
///
/// Displays as the wire-style tag (`GET`, `GET_INTERACTIONS`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Get,
    GetInteractions,
    Create,
    Update,
    Delete,
    Import,
    Unknown,
}

/// Every state transition request in the system.
///
/// `*Begin` variants are intents dispatched by callers; `*Success` /
/// `*Fail` are the terminal outcomes the effect engine produces, exactly
/// one per non-superseded Begin.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Fetch contacts ───────────────────────────────────────────────
    FetchContactsBegin,
    FetchContactsSuccess { contacts: Vec<Contact> },
    FetchContactsFail { error: CoreError },

    // ── Fetch interactions ───────────────────────────────────────────
    FetchInteractionsBegin { contact_id: i64 },
    FetchInteractionsSuccess { interactions: Vec<Interaction> },
    FetchInteractionsFail { error: CoreError },

    // ── Create ───────────────────────────────────────────────────────
    CreateContactBegin { form: ContactForm },
    CreateContactSuccess { contact: Contact },
    CreateContactFail { error: CoreError },

    // ── Delete ───────────────────────────────────────────────────────
    DeleteContactBegin { contact_id: i64 },
    DeleteContactSuccess { contact_id: i64 },
    DeleteContactFail { error: CoreError },

    // ── Update ───────────────────────────────────────────────────────
    UpdateContactBegin { form: ContactForm },
    UpdateContactSuccess { contact: Contact },
    UpdateContactFail { error: CoreError },

    // ── Batch import ─────────────────────────────────────────────────
    ImportContactsBegin { contacts: Vec<DeviceContactRecord> },
    ImportContactsSuccess { contacts: Vec<Contact> },
    ImportContactsFail { error: CoreError },

    // ── Filter (synchronous, over already-loaded state) ──────────────
    FilterContactsBegin { filter: KindFilter },
    FilterContactsSuccess { contacts: Vec<Contact> },
    FilterContactsFail { error: CoreError },

    // ── Selection ────────────────────────────────────────────────────
    SelectContact { contact_id: i64 },

    // ── Country codes ────────────────────────────────────────────────
    FetchCountryCodesBegin,
    FetchCountryCodesSuccess { codes: Vec<CountryCodeEntry> },
    FetchCountryCodesFail { error: CoreError },

    // ── Create interaction ───────────────────────────────────────────
    CreateInteractionBegin { contact_id: i64, form: InteractionForm },
    CreateInteractionSuccess { interaction: Interaction },
    CreateInteractionFail { error: CoreError },
}
