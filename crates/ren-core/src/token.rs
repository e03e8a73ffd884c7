//! Placeholder token generation for two-phase substitution.
//!
//! Every [`Item`](crate::models::Item) stages its replacement through an
//! intermediate placeholder string so that no step's source pattern can
//! accidentally match another step's freshly produced replacement value.
//! The scheme that derives the placeholder from a replacement value is
//! injectable: callers that know their input alphabet can supply a scheme
//! with a provably collision-free reserved marker.

/// Strategy for deriving a placeholder token from a replacement value.
///
/// Implementations must guarantee that, for inputs which do not contain
/// [`marker`](Self::marker), no generated placeholder can occur as a
/// substring of any input value. Pair validation enforces the marker
/// precondition before any placeholder is generated.
pub trait PlaceholderScheme {
    /// Derive the placeholder token that stands in for `new` between the
    /// two phases of a substitution.
    ///
    /// `new` is guaranteed non-empty by pair validation.
    fn placeholder(&self, new: &str) -> String;

    /// The reserved marker embedded in every placeholder. Input values
    /// containing this marker must be rejected before plan construction.
    fn marker(&self) -> &str;
}

/// Default scheme: wrap the replacement value in a bracketed marker,
/// keeping its first character ahead of the tag and the remainder behind
/// it, e.g. `"bar"` becomes `"[b:_temp_:ar_]"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketTag;

impl PlaceholderScheme for BracketTag {
    fn placeholder(&self, new: &str) -> String {
        let mut chars = new.chars();
        // Pair validation rejects empty values before this is reached.
        let first = chars.next().unwrap_or('\u{0}');
        format!("[{}{}{}_]", first, self.marker(), chars.as_str())
    }

    fn marker(&self) -> &str {
        ":_temp_:"
    }
}
