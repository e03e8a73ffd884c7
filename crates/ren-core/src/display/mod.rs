//! Display wrappers for plans and conflict reports.
//!
//! Domain models stay free of presentation logic; these newtype wrappers
//! provide the human-readable output formats: the numbered, column-aligned
//! step listing printed before any file is touched, and the per-pair
//! conflict report produced when a plan fails its consistency check.

mod conflicts;
mod listing;

pub use conflicts::Conflicts;
pub use listing::PlanListing;

/// Quote a value for display, matching the listing's `'value'` style.
pub(crate) fn quoted(value: &str) -> String {
    format!("'{value}'")
}
