//! Human-readable report of detected plan conflicts.

use std::fmt;

use crate::plan::{Conflict, ConflictKind};

use super::quoted;

/// Newtype wrapper rendering a conflict list, two lines per conflict:
///
/// ```text
/// Conflict:  2 (old)            'at'
/// Conflict:  1 (old)            'cat'
/// ```
///
/// Step numbers are 1-based positions in the plan listing. The first line
/// names the intruding value, the second the pending pattern it intrudes
/// on.
pub struct Conflicts<'a>(pub &'a [Conflict]);

impl fmt::Display for Conflicts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for conflict in self.0 {
            let role = match conflict.kind {
                ConflictKind::ReplacementInSource => "new",
                ConflictKind::SourceInSource => "old",
            };
            writeln!(
                f,
                "Conflict:  {:<20} {}",
                format!("{} ({})", conflict.value_step + 1, role),
                quoted(&conflict.value),
            )?;
            writeln!(
                f,
                "Conflict:  {:<20} {}",
                format!("{} (old)", conflict.pattern_step + 1),
                quoted(&conflict.pattern),
            )?;
        }
        Ok(())
    }
}
