// ── Effect engine ──
//
// Consumes Begin intents from the store's action channel, invokes the
// domain service, and dispatches exactly one terminal action per intent.
// Failures become Fail actions; nothing escapes the pipeline, so the
// engine keeps listening no matter what an invocation did.
//
// Concurrency: last-request-wins per operation. Each Begin replaces the
// in-flight cancellation token for its operation class; a superseded
// invocation is cancelled before its terminal action is dispatched.
// Different operations stay fully independent.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::action::Action;
use crate::model::KindFilter;
use crate::service::ContactsService;
use crate::store::ContactStore;

/// One entry per asynchronous operation class, keying the in-flight
/// cancellation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum EffectKind {
    Fetch,
    CountryCodes,
    Interactions,
    Create,
    Delete,
    Update,
    Import,
    CreateInteraction,
}

pub(crate) struct EffectsEngine {
    store: ContactStore,
    service: Arc<ContactsService>,
    cancel: CancellationToken,
    in_flight: HashMap<EffectKind, CancellationToken>,
}

impl EffectsEngine {
    pub(crate) fn new(
        store: ContactStore,
        service: Arc<ContactsService>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            store,
            service,
            cancel,
            in_flight: HashMap::new(),
        }
    }

    /// Drive the engine until the root token is cancelled or the store
    /// is dropped. Begin actions are handled in arrival order.
    pub(crate) async fn run(mut self, mut actions: mpsc::UnboundedReceiver<Action>) {
        let cancel = self.cancel.clone();

        loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                action = actions.recv() => {
                    let Some(action) = action else { break };
                    self.handle(action);
                }
            }
        }
        debug!("effect engine stopped");
    }

    #[allow(clippy::too_many_lines)]
    fn handle(&mut self, action: Action) {
        match action {
            Action::FetchContactsBegin => {
                let service = Arc::clone(&self.service);
                self.switch_to(EffectKind::Fetch, async move {
                    match service.load_remote_contacts().await {
                        Ok(contacts) => Action::FetchContactsSuccess { contacts },
                        Err(error) => {
                            warn!(%error, "couldn't fetch contacts");
                            Action::FetchContactsFail { error }
                        }
                    }
                });
            }

            Action::FetchCountryCodesBegin => {
                let service = Arc::clone(&self.service);
                self.switch_to(EffectKind::CountryCodes, async move {
                    match service.load_country_codes().await {
                        Ok(codes) => Action::FetchCountryCodesSuccess { codes },
                        Err(error) => {
                            warn!(%error, "couldn't fetch country codes");
                            Action::FetchCountryCodesFail { error }
                        }
                    }
                });
            }

            Action::FetchInteractionsBegin { contact_id } => {
                let service = Arc::clone(&self.service);
                self.switch_to(EffectKind::Interactions, async move {
                    match service.load_contact_interactions(contact_id).await {
                        Ok(interactions) => Action::FetchInteractionsSuccess { interactions },
                        Err(error) => {
                            warn!(%error, contact_id, "couldn't fetch contact interactions");
                            Action::FetchInteractionsFail { error }
                        }
                    }
                });
            }

            Action::CreateContactBegin { form } => {
                let service = Arc::clone(&self.service);
                self.switch_to(EffectKind::Create, async move {
                    match service.create_contact(&form).await {
                        Ok(contact) => Action::CreateContactSuccess { contact },
                        Err(error) => {
                            warn!(%error, "couldn't create contact");
                            Action::CreateContactFail { error }
                        }
                    }
                });
            }

            Action::DeleteContactBegin { contact_id } => {
                let service = Arc::clone(&self.service);
                self.switch_to(EffectKind::Delete, async move {
                    match service.delete_contact(contact_id).await {
                        Ok(contact_id) => Action::DeleteContactSuccess { contact_id },
                        Err(error) => {
                            warn!(%error, contact_id, "couldn't delete contact");
                            Action::DeleteContactFail { error }
                        }
                    }
                });
            }

            Action::UpdateContactBegin { form } => {
                let service = Arc::clone(&self.service);
                self.switch_to(EffectKind::Update, async move {
                    match service.update_contact(&form).await {
                        Ok(contact) => Action::UpdateContactSuccess { contact },
                        Err(error) => {
                            warn!(%error, "couldn't update contact");
                            Action::UpdateContactFail { error }
                        }
                    }
                });
            }

            Action::ImportContactsBegin { contacts } => {
                let service = Arc::clone(&self.service);
                self.switch_to(EffectKind::Import, async move {
                    match service.import_contacts(&contacts).await {
                        Ok(contacts) => Action::ImportContactsSuccess { contacts },
                        Err(error) => {
                            warn!(%error, "couldn't import contacts");
                            Action::ImportContactsFail { error }
                        }
                    }
                });
            }

            Action::CreateInteractionBegin { contact_id, form } => {
                let service = Arc::clone(&self.service);
                self.switch_to(EffectKind::CreateInteraction, async move {
                    match service.create_interaction(contact_id, &form).await {
                        Ok(interaction) => Action::CreateInteractionSuccess { interaction },
                        Err(error) => {
                            warn!(%error, contact_id, "couldn't create interaction");
                            Action::CreateInteractionFail { error }
                        }
                    }
                });
            }

            // Synchronous over already-loaded state; no service call.
            Action::FilterContactsBegin { filter } => self.filter(filter),

            // Terminal outcomes and selection carry no effect.
            Action::FetchContactsSuccess { .. }
            | Action::FetchContactsFail { .. }
            | Action::FetchInteractionsSuccess { .. }
            | Action::FetchInteractionsFail { .. }
            | Action::CreateContactSuccess { .. }
            | Action::CreateContactFail { .. }
            | Action::DeleteContactSuccess { .. }
            | Action::DeleteContactFail { .. }
            | Action::UpdateContactSuccess { .. }
            | Action::UpdateContactFail { .. }
            | Action::ImportContactsSuccess { .. }
            | Action::ImportContactsFail { .. }
            | Action::FilterContactsSuccess { .. }
            | Action::FilterContactsFail { .. }
            | Action::SelectContact { .. }
            | Action::FetchCountryCodesSuccess { .. }
            | Action::FetchCountryCodesFail { .. }
            | Action::CreateInteractionSuccess { .. }
            | Action::CreateInteractionFail { .. } => {}
        }
    }

    /// Filter the store's latest contact list by classification.
    ///
    /// [`KindFilter::All`] passes the list through unchanged.
    fn filter(&self, filter: KindFilter) {
        let state = self.store.state();
        let contacts = state
            .items
            .iter()
            .filter(|c| filter.matches(c.kind))
            .cloned()
            .collect();

        self.store.dispatch(Action::FilterContactsSuccess { contacts });
    }

    /// Spawn `work`, superseding any in-flight invocation of the same
    /// operation class. A superseded invocation never dispatches its
    /// terminal action.
    fn switch_to(&mut self, kind: EffectKind, work: impl Future<Output = Action> + Send + 'static) {
        let token = self.cancel.child_token();
        if let Some(previous) = self.in_flight.insert(kind, token.clone()) {
            previous.cancel();
        }

        let store = self.store.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {}
                action = work => store.dispatch(action),
            }
        });
    }
}
