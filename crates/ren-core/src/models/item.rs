//! Item and item-list models: two-phase decomposition of substitution pairs.

use crate::error::{ReplacerError, Result};
use crate::token::PlaceholderScheme;

use super::Step;

/// A requested substitution pair, decomposed into two placeholder-mediated
/// steps.
///
/// `step1` converts `old` into a placeholder token derived from `new`;
/// `step2` resolves that placeholder into `new`. Running every item's
/// `step1` before any `step2` isolates all original values before any
/// replacement value becomes visible, which is what makes simultaneous
/// swaps safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    old: String,
    new: String,
    step1: Step,
    step2: Step,
}

impl Item {
    /// Build an item for the pair `(old, new)` using `scheme` to derive the
    /// intermediate placeholder.
    pub fn new(
        old: impl Into<String>,
        new: impl Into<String>,
        scheme: &dyn PlaceholderScheme,
    ) -> Self {
        let old = old.into();
        let new = new.into();
        let token = scheme.placeholder(&new);
        let step1 = Step::new(old.clone(), token.clone());
        let step2 = Step::new(token, new.clone());
        Self {
            old,
            new,
            step1,
            step2,
        }
    }

    /// The pattern to be replaced.
    pub fn old(&self) -> &str {
        &self.old
    }

    /// The final replacement value.
    pub fn new_value(&self) -> &str {
        &self.new
    }

    /// First phase: `old` to placeholder.
    pub fn step1(&self) -> &Step {
        &self.step1
    }

    /// Second phase: placeholder to `new`.
    pub fn step2(&self) -> &Step {
        &self.step2
    }

    /// The same pair in the opposite direction, with its own placeholder
    /// derived from what is now the replacement value. Used by symmetric
    /// (swap) mode.
    pub fn reversed(&self, scheme: &dyn PlaceholderScheme) -> Item {
        Item::new(self.new.clone(), self.old.clone(), scheme)
    }
}

/// Ordered collection of items, one per input pair.
///
/// Insertion order is preserved; it determines display order and conflict
/// reporting order, not substitution correctness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    /// Validate raw pairs and build the item list.
    ///
    /// Rejects empty `old`/`new` values and values containing the scheme's
    /// reserved marker, since either would break the placeholder-isolation
    /// invariant.
    pub fn from_pairs(pairs: &[(String, String)], scheme: &dyn PlaceholderScheme) -> Result<Self> {
        let marker = scheme.marker();
        for (index, (old, new)) in pairs.iter().enumerate() {
            validate_value(old, index, "old", marker)?;
            validate_value(new, index, "new", marker)?;
        }
        let items = pairs
            .iter()
            .map(|(old, new)| Item::new(old.clone(), new.clone(), scheme))
            .collect();
        Ok(Self { items })
    }

    /// The items in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn validate_value(value: &str, index: usize, role: &str, marker: &str) -> Result<()> {
    let field = format!("pair {} {}", index + 1, role);
    if value.is_empty() {
        return Err(ReplacerError::invalid_input(field).with_reason("value must not be empty"));
    }
    if value.contains(marker) {
        return Err(ReplacerError::invalid_input(field)
            .with_reason(format!("value must not contain the reserved marker '{marker}'")));
    }
    Ok(())
}
