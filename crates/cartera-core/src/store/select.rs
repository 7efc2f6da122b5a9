// ── Selectors ──
//
// Pure derivations over the state aggregate. Recomputed per state change,
// holding no state of their own -- the only read surface the store exposes
// beyond the aggregate itself.

use crate::model::{Contact, CountryCodeEntry, Interaction};

use super::reducer::{ContactState, StateError, StateSuccess};

pub fn is_loading(state: &ContactState) -> bool {
    state.is_loading
}

pub fn items(state: &ContactState) -> &[Contact] {
    &state.items
}

pub fn filtered_items(state: &ContactState) -> &[Contact] {
    &state.filtered_items
}

pub fn has_been_fetched(state: &ContactState) -> bool {
    state.has_been_fetched
}

pub fn error(state: &ContactState) -> Option<&StateError> {
    state.error.as_ref()
}

pub fn success(state: &ContactState) -> Option<&StateSuccess> {
    state.success.as_ref()
}

pub fn interactions(state: &ContactState) -> &[Interaction] {
    &state.interactions.items
}

pub fn is_loading_interactions(state: &ContactState) -> bool {
    state.interactions.is_loading
}

pub fn interactions_error(state: &ContactState) -> Option<&StateError> {
    state.interactions.error.as_ref()
}

pub fn country_codes(state: &ContactState) -> &[CountryCodeEntry] {
    &state.country_codes.items
}

pub fn is_loading_country_codes(state: &ContactState) -> bool {
    state.country_codes.is_loading
}

pub fn country_codes_error(state: &ContactState) -> Option<&StateError> {
    state.country_codes.error.as_ref()
}

/// The contact the current `selected_id` points at, if any.
pub fn selected_contact(state: &ContactState) -> Option<&Contact> {
    let id = state.selected_id?;
    state.items.iter().find(|c| c.id == Some(id))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::action::Action;
    use crate::store::reducer::reduce;

    #[test]
    fn selected_contact_follows_the_selection() {
        let base = Arc::new(ContactState {
            items: vec![
                Contact {
                    id: Some(1),
                    ..Contact::empty()
                },
                Contact {
                    id: Some(2),
                    ..Contact::empty()
                },
            ],
            ..ContactState::default()
        });

        assert!(selected_contact(&base).is_none());

        let selected = reduce(&base, &Action::SelectContact { contact_id: 2 });
        assert_eq!(selected_contact(&selected).and_then(|c| c.id), Some(2));

        let gone = reduce(&selected, &Action::SelectContact { contact_id: 99 });
        assert!(selected_contact(&gone).is_none());
    }
}
