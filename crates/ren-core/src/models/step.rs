//! Step model definition and related functionality.

/// One atomic literal substitution: replace every non-overlapping,
/// leftmost-first occurrence of `old` with `new`.
///
/// Steps are immutable once created. Both values are guaranteed non-empty
/// by pair validation upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    old: String,
    new: String,
}

impl Step {
    /// Create a step replacing `old` with `new`.
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// The pattern this step searches for.
    pub fn old(&self) -> &str {
        &self.old
    }

    /// The value this step substitutes in.
    pub fn new_value(&self) -> &str {
        &self.new
    }

    /// Apply this step to a single line of text.
    pub fn apply(&self, line: &str) -> String {
        line.replace(&self.old, &self.new)
    }
}
