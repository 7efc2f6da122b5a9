// ── State aggregate and reducer ──
//
// The single source of truth. `reduce` is a pure transition function; the
// store facade is its only caller, invoked synchronously per dispatched
// action. Transitions without a clause hand back the same `Arc`, so
// subscribers can use pointer equality for change detection.

use std::sync::Arc;

use crate::action::{Action, Operation};
use crate::error::CoreError;
use crate::model::{Contact, CountryCodeEntry, Interaction};

/// Which operation failed, and with what.
#[derive(Debug, Clone, PartialEq)]
pub struct StateError {
    pub after: Operation,
    pub error: CoreError,
}

impl StateError {
    fn new(after: Operation, error: CoreError) -> Self {
        Self { after, error }
    }
}

/// Which operation completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSuccess {
    pub after: Operation,
}

impl StateSuccess {
    fn new(after: Operation) -> Self {
        Self { after }
    }
}

/// Nested interaction sub-state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionsState {
    pub is_loading: bool,
    pub items: Vec<Interaction>,
    pub error: Option<StateError>,
}

/// Nested country-code sub-state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryCodesState {
    pub items: Vec<CountryCodeEntry>,
    pub is_loading: bool,
    pub error: Option<StateError>,
}

/// The full contact-module state aggregate.
///
/// `error` and `success` are mutually exclusive for the top-level contact
/// operations: every Begin clears both before the terminal action sets
/// one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    pub is_loading: bool,
    /// Full contact list, newest-first after creation/import.
    pub items: Vec<Contact>,
    /// Last computed filter result, independent of `items`.
    pub filtered_items: Vec<Contact>,
    pub selected_id: Option<i64>,
    pub interactions: InteractionsState,
    pub country_codes: CountryCodesState,
    pub has_been_fetched: bool,
    pub error: Option<StateError>,
    pub success: Option<StateSuccess>,
}

/// Fold one action into the state.
///
/// Pure: no I/O, no clock, no randomness. Actions with no reducer clause
/// return `Arc::clone(state)` -- the identical allocation.
#[allow(clippy::too_many_lines)]
pub fn reduce(state: &Arc<ContactState>, action: &Action) -> Arc<ContactState> {
    match action {
        // ── Begin: top-level contact operations ──────────────────────
        Action::FetchContactsBegin
        | Action::CreateContactBegin { .. }
        | Action::DeleteContactBegin { .. }
        | Action::UpdateContactBegin { .. }
        | Action::ImportContactsBegin { .. } => {
            let mut next = ContactState::clone(state);
            next.is_loading = true;
            next.error = None;
            next.success = None;
            Arc::new(next)
        }

        // ── Begin: nested sub-states ─────────────────────────────────
        Action::FetchCountryCodesBegin => {
            let mut next = ContactState::clone(state);
            next.country_codes.is_loading = true;
            next.country_codes.error = None;
            Arc::new(next)
        }

        Action::FetchInteractionsBegin { .. } => {
            let mut next = ContactState::clone(state);
            next.interactions.is_loading = true;
            next.interactions.items = Vec::new();
            next.interactions.error = None;
            Arc::new(next)
        }

        // ── Fail ─────────────────────────────────────────────────────
        Action::FetchContactsFail { error } => fail(state, Operation::Get, error),
        Action::CreateContactFail { error } => fail(state, Operation::Create, error),
        Action::DeleteContactFail { error } => fail(state, Operation::Delete, error),
        Action::UpdateContactFail { error } => fail(state, Operation::Update, error),
        Action::ImportContactsFail { error } => fail(state, Operation::Import, error),
        Action::FilterContactsFail { error } => fail(state, Operation::Unknown, error),

        Action::FetchCountryCodesFail { error } => {
            let mut next = ContactState::clone(state);
            next.country_codes.is_loading = false;
            next.country_codes.error = Some(StateError::new(Operation::Unknown, error.clone()));
            Arc::new(next)
        }

        Action::FetchInteractionsFail { error } => {
            let mut next = ContactState::clone(state);
            next.interactions.is_loading = false;
            next.interactions.error =
                Some(StateError::new(Operation::GetInteractions, error.clone()));
            Arc::new(next)
        }

        Action::CreateInteractionFail { error } => {
            let mut next = ContactState::clone(state);
            next.interactions.is_loading = false;
            next.interactions.error = Some(StateError::new(Operation::Unknown, error.clone()));
            Arc::new(next)
        }

        // ── Success: reads ───────────────────────────────────────────
        Action::FetchContactsSuccess { contacts } => {
            let mut next = ContactState::clone(state);
            next.is_loading = false;
            next.items = contacts.clone();
            next.has_been_fetched = true;
            Arc::new(next)
        }

        Action::FetchCountryCodesSuccess { codes } => {
            let mut next = ContactState::clone(state);
            next.country_codes.is_loading = false;
            next.country_codes.items = codes.clone();
            Arc::new(next)
        }

        Action::FetchInteractionsSuccess { interactions } => {
            let mut next = ContactState::clone(state);
            next.interactions.is_loading = false;
            next.interactions.items = interactions.clone();
            Arc::new(next)
        }

        Action::CreateInteractionSuccess { interaction } => {
            let mut next = ContactState::clone(state);
            next.interactions.is_loading = false;
            next.interactions.items.insert(0, interaction.clone());
            Arc::new(next)
        }

        // ── Success: inserts ─────────────────────────────────────────
        Action::CreateContactSuccess { contact } => {
            let mut next = ContactState::clone(state);
            next.is_loading = false;
            next.items.insert(0, contact.clone());
            next.success = Some(StateSuccess::new(Operation::Create));
            Arc::new(next)
        }

        Action::ImportContactsSuccess { contacts } => {
            let mut next = ContactState::clone(state);
            next.is_loading = false;
            next.items = contacts.iter().chain(state.items.iter()).cloned().collect();
            next.success = Some(StateSuccess::new(Operation::Import));
            Arc::new(next)
        }

        // ── Success: removal ─────────────────────────────────────────
        Action::DeleteContactSuccess { contact_id } => {
            let mut next = ContactState::clone(state);
            next.is_loading = false;
            next.items.retain(|c| c.id != Some(*contact_id));
            next.success = Some(StateSuccess::new(Operation::Delete));
            Arc::new(next)
        }

        // ── Success: in-place replacement ────────────────────────────
        Action::UpdateContactSuccess { contact } => {
            let mut next = ContactState::clone(state);
            next.is_loading = false;
            if let Some(slot) = next.items.iter_mut().find(|c| c.id == contact.id) {
                *slot = contact.clone();
            }
            next.success = Some(StateSuccess::new(Operation::Update));
            Arc::new(next)
        }

        // ── Filter ───────────────────────────────────────────────────
        Action::FilterContactsSuccess { contacts } => {
            let mut next = ContactState::clone(state);
            next.filtered_items = contacts.clone();
            next.is_loading = false;
            next.error = None;
            next.success = None;
            Arc::new(next)
        }

        // ── Selection ────────────────────────────────────────────────
        Action::SelectContact { contact_id } => {
            let mut next = ContactState::clone(state);
            next.selected_id = Some(*contact_id);
            next.error = None;
            next.success = None;
            Arc::new(next)
        }

        // No reducer clause: the filter intent itself and the interaction
        // write intent leave the state untouched (the effect still runs).
        Action::FilterContactsBegin { .. } | Action::CreateInteractionBegin { .. } => {
            Arc::clone(state)
        }
    }
}

fn fail(state: &Arc<ContactState>, after: Operation, error: &CoreError) -> Arc<ContactState> {
    let mut next = ContactState::clone(state);
    next.is_loading = false;
    next.error = Some(StateError::new(after, error.clone()));
    Arc::new(next)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ContactKind, fallback_country_codes};

    fn contact(id: i64) -> Contact {
        Contact {
            id: Some(id),
            name: format!("contact-{id}"),
            ..Contact::empty()
        }
    }

    fn interaction(id: i64) -> Interaction {
        Interaction {
            id,
            contact_id: 1,
            entity: "call".into(),
            entity_id: id,
            kind: crate::model::InteractionKind::ContactCall,
            created_at: String::new(),
            display_text: String::new(),
        }
    }

    fn some_error() -> CoreError {
        CoreError::Api {
            message: "some bad error".into(),
            status: Some(500),
        }
    }

    /// A state carrying stale error/success descriptors, to observe the
    /// clearing behavior of Begin actions.
    fn dirty_state() -> Arc<ContactState> {
        Arc::new(ContactState {
            error: Some(StateError::new(Operation::Update, some_error())),
            success: Some(StateSuccess::new(Operation::Create)),
            ..ContactState::default()
        })
    }

    #[test]
    fn begin_actions_set_loading_and_clear_error_and_success() {
        let begins = [
            Action::FetchContactsBegin,
            Action::CreateContactBegin {
                form: cartera_api::models::ContactForm::default(),
            },
            Action::DeleteContactBegin { contact_id: 123 },
            Action::UpdateContactBegin {
                form: cartera_api::models::ContactForm::default(),
            },
            Action::ImportContactsBegin {
                contacts: Vec::new(),
            },
        ];

        for begin in begins {
            let state = reduce(&dirty_state(), &begin);
            assert!(state.is_loading, "not loading after {begin:?}");
            assert_eq!(state.error, None);
            assert_eq!(state.success, None);
        }
    }

    #[test]
    fn country_codes_begin_only_touches_the_nested_state() {
        let state = reduce(&dirty_state(), &Action::FetchCountryCodesBegin);

        assert!(state.country_codes.is_loading);
        assert_eq!(state.country_codes.error, None);
        assert!(!state.is_loading);
    }

    #[test]
    fn interactions_begin_clears_previous_items() {
        let initial = Arc::new(ContactState {
            interactions: InteractionsState {
                items: vec![interaction(1)],
                ..InteractionsState::default()
            },
            ..ContactState::default()
        });

        let state = reduce(&initial, &Action::FetchInteractionsBegin { contact_id: 1 });

        assert!(state.interactions.is_loading);
        assert!(state.interactions.items.is_empty());
    }

    #[test]
    fn fetch_success_replaces_items_and_marks_fetched() {
        let begun = reduce(&Arc::new(ContactState::default()), &Action::FetchContactsBegin);
        let state = reduce(
            &begun,
            &Action::FetchContactsSuccess {
                contacts: vec![contact(5), contact(3)],
            },
        );

        assert_eq!(state.items, vec![contact(5), contact(3)]);
        assert!(!state.is_loading);
        assert!(state.has_been_fetched);
        assert_eq!(state.success, None);
    }

    #[test]
    fn fail_records_the_operation_and_stops_loading() {
        let begun = reduce(&Arc::new(ContactState::default()), &Action::FetchContactsBegin);
        let state = reduce(
            &begun,
            &Action::FetchContactsFail {
                error: some_error(),
            },
        );

        assert!(!state.is_loading);
        let err = state.error.as_ref().unwrap();
        assert_eq!(err.after, Operation::Get);
        assert_eq!(err.error, some_error());
        assert_eq!(state.success, None);
    }

    #[test]
    fn create_success_prepends_and_is_not_idempotent() {
        let initial = Arc::new(ContactState {
            items: vec![contact(1)],
            ..ContactState::default()
        });

        let action = Action::CreateContactSuccess {
            contact: contact(9),
        };
        let once = reduce(&initial, &action);
        let twice = reduce(&once, &action);

        assert_eq!(once.items, vec![contact(9), contact(1)]);
        // Dispatching the same success twice prepends again; duplication
        // is the contract, not an accident.
        assert_eq!(twice.items, vec![contact(9), contact(9), contact(1)]);
        assert_eq!(once.success, Some(StateSuccess::new(Operation::Create)));
    }

    #[test]
    fn import_success_prepends_the_batch_in_order() {
        let initial = Arc::new(ContactState {
            items: vec![contact(1)],
            ..ContactState::default()
        });

        let state = reduce(
            &initial,
            &Action::ImportContactsSuccess {
                contacts: vec![contact(7), contact(8)],
            },
        );

        assert_eq!(state.items, vec![contact(7), contact(8), contact(1)]);
        assert_eq!(state.success, Some(StateSuccess::new(Operation::Import)));
    }

    #[test]
    fn delete_success_removes_the_matching_contact() {
        let initial = Arc::new(ContactState {
            items: vec![contact(1), contact(2)],
            ..ContactState::default()
        });

        let state = reduce(&initial, &Action::DeleteContactSuccess { contact_id: 2 });

        assert_eq!(state.items, vec![contact(1)]);
        assert_eq!(state.success, Some(StateSuccess::new(Operation::Delete)));
        assert!(!state.is_loading);
    }

    #[test]
    fn update_success_replaces_in_place() {
        let initial = Arc::new(ContactState {
            items: vec![contact(1), contact(2), contact(3)],
            ..ContactState::default()
        });

        let updated = Contact {
            name: "renamed".into(),
            kind: ContactKind::Client,
            ..contact(2)
        };

        let state = reduce(
            &initial,
            &Action::UpdateContactSuccess {
                contact: updated.clone(),
            },
        );

        assert_eq!(state.items, vec![contact(1), updated, contact(3)]);
        assert_eq!(state.success, Some(StateSuccess::new(Operation::Update)));
    }

    #[test]
    fn update_success_with_unknown_id_changes_nothing_but_the_descriptor() {
        let initial = Arc::new(ContactState {
            items: vec![contact(1)],
            ..ContactState::default()
        });

        let state = reduce(
            &initial,
            &Action::UpdateContactSuccess {
                contact: contact(99),
            },
        );

        assert_eq!(state.items, vec![contact(1)]);
        assert_eq!(state.success, Some(StateSuccess::new(Operation::Update)));
    }

    #[test]
    fn filter_success_only_replaces_filtered_items() {
        let initial = Arc::new(ContactState {
            items: vec![contact(1), contact(2)],
            ..ContactState::default()
        });

        let state = reduce(
            &initial,
            &Action::FilterContactsSuccess {
                contacts: vec![contact(2)],
            },
        );

        assert_eq!(state.filtered_items, vec![contact(2)]);
        assert_eq!(state.items, vec![contact(1), contact(2)]);
        assert_eq!(state.error, None);
        assert_eq!(state.success, None);
    }

    #[test]
    fn select_records_the_id_and_clears_descriptors() {
        let state = reduce(&dirty_state(), &Action::SelectContact { contact_id: 42 });

        assert_eq!(state.selected_id, Some(42));
        assert_eq!(state.error, None);
        assert_eq!(state.success, None);
    }

    #[test]
    fn country_codes_success_and_fail_stay_nested() {
        let initial = Arc::new(ContactState::default());

        let ok = reduce(
            &initial,
            &Action::FetchCountryCodesSuccess {
                codes: fallback_country_codes(),
            },
        );
        assert_eq!(ok.country_codes.items.len(), 3);
        assert!(!ok.country_codes.is_loading);
        assert_eq!(ok.success, None);

        let failed = reduce(
            &initial,
            &Action::FetchCountryCodesFail {
                error: some_error(),
            },
        );
        assert_eq!(
            failed.country_codes.error.as_ref().unwrap().after,
            Operation::Unknown
        );
        assert_eq!(failed.error, None);
    }

    #[test]
    fn interactions_fail_uses_the_get_interactions_tag() {
        let state = reduce(
            &Arc::new(ContactState::default()),
            &Action::FetchInteractionsFail {
                error: some_error(),
            },
        );

        let err = state.interactions.error.as_ref().unwrap();
        assert_eq!(err.after, Operation::GetInteractions);
        assert_eq!(state.error, None);
    }

    #[test]
    fn create_interaction_success_prepends_to_the_nested_items() {
        let initial = Arc::new(ContactState {
            interactions: InteractionsState {
                items: vec![interaction(1)],
                ..InteractionsState::default()
            },
            ..ContactState::default()
        });

        let state = reduce(
            &initial,
            &Action::CreateInteractionSuccess {
                interaction: interaction(2),
            },
        );

        assert_eq!(state.interactions.items, vec![interaction(2), interaction(1)]);
    }

    #[test]
    fn actions_without_a_clause_return_the_identical_allocation() {
        let initial = Arc::new(ContactState::default());

        let after_begin = reduce(
            &initial,
            &Action::CreateInteractionBegin {
                contact_id: 1,
                form: cartera_api::models::InteractionForm::default(),
            },
        );
        assert!(Arc::ptr_eq(&initial, &after_begin));

        let after_filter_begin = reduce(
            &initial,
            &Action::FilterContactsBegin {
                filter: crate::model::KindFilter::All,
            },
        );
        assert!(Arc::ptr_eq(&initial, &after_filter_begin));
    }
}
