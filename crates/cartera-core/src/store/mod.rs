// ── Contact state store ──
//
// The single shared state cell plus the facade consumers talk to.
// The reducer is the only writer; `dispatch` folds each action in
// synchronously and atomically, then forwards it to the effect engine.

pub mod reducer;
pub mod select;
mod stream;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};

use cartera_api::models::{ContactForm, DeviceContactRecord, InteractionForm};

use crate::action::Action;
use crate::model::{Contact, KindFilter};

pub use reducer::{
    ContactState, CountryCodesState, InteractionsState, StateError, StateSuccess, reduce,
};
pub use stream::{StateStream, StateWatchStream};

/// Store facade: typed read access plus dispatch helpers.
///
/// Cheaply cloneable; all clones share the same state cell. Reads never
/// block -- they borrow the latest `Arc<ContactState>` snapshot.
#[derive(Clone)]
pub struct ContactStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: watch::Sender<Arc<ContactState>>,
    actions: mpsc::UnboundedSender<Action>,
    last_fetched: watch::Sender<Option<DateTime<Utc>>>,
}

impl ContactStore {
    /// Create a store and the action receiver the effect engine consumes.
    pub(crate) fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (state, _) = watch::channel(Arc::new(ContactState::default()));
        let (actions, actions_rx) = mpsc::unbounded_channel();
        let (last_fetched, _) = watch::channel(None);

        let store = Self {
            inner: Arc::new(StoreInner {
                state,
                actions,
                last_fetched,
            }),
        };
        (store, actions_rx)
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Reduce `action` into the state, then hand it to the effect engine.
    ///
    /// Reduction happens synchronously inside the watch cell's write
    /// lock, so no subscriber ever observes a partially applied action.
    pub fn dispatch(&self, action: Action) {
        if matches!(action, Action::FetchContactsSuccess { .. }) {
            let _ = self.inner.last_fetched.send(Some(Utc::now()));
        }

        self.inner
            .state
            .send_modify(|state| *state = reducer::reduce(state, &action));

        // The engine ignores everything that is not a Begin intent.
        let _ = self.inner.actions.send(action);
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// The current state snapshot (cheap `Arc` clone).
    pub fn state(&self) -> Arc<ContactState> {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to raw state changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ContactState>> {
        self.inner.state.subscribe()
    }

    /// Subscribe as a [`StateStream`].
    pub fn stream(&self) -> StateStream {
        StateStream::new(self.inner.state.subscribe())
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading
    }

    pub fn has_been_fetched(&self) -> bool {
        self.state().has_been_fetched
    }

    /// The current contact list (cloned out of the snapshot).
    pub fn contacts(&self) -> Vec<Contact> {
        self.state().items.clone()
    }

    /// Select a contact, then resolve it from the current list.
    pub fn contact_by_id(&self, contact_id: i64) -> Option<Contact> {
        self.dispatch(Action::SelectContact { contact_id });
        select::selected_contact(&self.state()).cloned()
    }

    /// When the last successful full fetch landed, if ever.
    pub fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        *self.inner.last_fetched.borrow()
    }

    /// How long ago the last full fetch occurred.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_fetched_at().map(|t| Utc::now() - t)
    }

    // ── Dispatch helpers (Begin intents) ─────────────────────────────

    pub fn fetch_contacts(&self) {
        self.dispatch(Action::FetchContactsBegin);
    }

    pub fn fetch_country_codes(&self) {
        self.dispatch(Action::FetchCountryCodesBegin);
    }

    pub fn fetch_interactions(&self, contact_id: i64) {
        self.dispatch(Action::FetchInteractionsBegin { contact_id });
    }

    pub fn create_contact(&self, form: ContactForm) {
        self.dispatch(Action::CreateContactBegin { form });
    }

    pub fn update_contact(&self, form: ContactForm) {
        self.dispatch(Action::UpdateContactBegin { form });
    }

    pub fn delete_contact(&self, contact_id: i64) {
        self.dispatch(Action::DeleteContactBegin { contact_id });
    }

    pub fn import_contacts(&self, contacts: Vec<DeviceContactRecord>) {
        self.dispatch(Action::ImportContactsBegin { contacts });
    }

    pub fn filter_contacts(&self, filter: KindFilter) {
        self.dispatch(Action::FilterContactsBegin { filter });
    }

    pub fn select_contact(&self, contact_id: i64) {
        self.dispatch(Action::SelectContact { contact_id });
    }

    pub fn create_interaction(&self, contact_id: i64, form: InteractionForm) {
        self.dispatch(Action::CreateInteractionBegin { contact_id, form });
    }
}
