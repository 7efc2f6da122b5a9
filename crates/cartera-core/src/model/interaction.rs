// ── Interaction record ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What kind of event was logged against a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionKind {
    Create,
    UpdateType,
    ContactCall,
    ContactScheduled,
    ContactEmail,
}

/// One logged event against a contact.
///
/// Append-only from the state's perspective: new interactions are
/// prepended to the list, never merged or de-duplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: i64,
    pub contact_id: i64,
    /// Free-form name of the entity the event refers to.
    pub entity: String,
    pub entity_id: i64,
    pub kind: InteractionKind,
    /// Opaque server timestamp, never parsed.
    pub created_at: String,
    pub display_text: String,
}
