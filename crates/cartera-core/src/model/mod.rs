// ── Canonical domain model ──
//
// In-memory record shapes, independent of wire and device formats.
// Conversions from wire records live in `crate::convert`.

pub mod contact;
pub mod country;
pub mod interaction;

pub use contact::{Contact, ContactKind, ContactOrigin, KindFilter, normalize_phone};
pub use country::fallback_country_codes;
pub use interaction::{Interaction, InteractionKind};

// Country reference entries are used verbatim from the wire; there is no
// richer in-memory shape to convert into.
pub use cartera_api::models::CountryCodeEntry;
