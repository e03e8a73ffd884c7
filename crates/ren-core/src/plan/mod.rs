//! Plan construction, consistency verification, and file application.
//!
//! A [`Plan`] orders every item's steps so that all first-phase
//! substitutions (original value to placeholder) run before any
//! second-phase substitution (placeholder to final value). In symmetric
//! mode the reversed items' phases are interleaved into the same global
//! ordering, which is what makes simultaneous `A -> B` and `B -> A` swaps
//! safe.
//!
//! Consistency is verified statically at construction time, before any
//! file is touched. The check inspects only the first half of the step
//! list: second-phase steps consume placeholders, which by construction
//! cannot occur as any step's source pattern, so the first half dominates
//! the interference analysis.

#[cfg(test)]
mod tests;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::error::{IoResultExt, ReplacerError, Result};
use crate::models::{Item, ItemList, Step};
use crate::token::PlaceholderScheme;

/// Suffix appended to the original file name when not replacing in place.
pub const OUTPUT_SUFFIX: &str = "ren";

/// How a conflicting value intrudes on another step's pending pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// A step's resolved replacement value occurs inside another step's
    /// still-pending source pattern.
    ReplacementInSource,
    /// A step's source pattern occurs inside another step's source
    /// pattern, making application order-dependent.
    SourceInSource,
}

/// One detected interference between two first-half steps.
///
/// Step indices are 0-based positions in the plan's step list; both always
/// fall in the first half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// The kind of intrusion detected.
    pub kind: ConflictKind,
    /// Step whose value intrudes.
    pub value_step: usize,
    /// The intruding value (resolved replacement or source pattern,
    /// depending on `kind`).
    pub value: String,
    /// Step whose pending source pattern contains the value.
    pub pattern_step: usize,
    /// That step's source pattern.
    pub pattern: String,
}

/// The fully ordered, verified sequence of substitution steps.
///
/// Immutable after construction; consistency is computed eagerly. A plan
/// is built once from an [`ItemList`] and is not reused across inputs.
#[derive(Debug, Clone)]
pub struct Plan {
    steps: Vec<Step>,
    conflicts: Vec<Conflict>,
    consistent: bool,
}

impl Plan {
    /// Build a plan from an item list.
    ///
    /// Step order is: every item's first phase in input order, then (in
    /// symmetric mode) every reversed item's first phase, then the second
    /// phases in the same order. The consistency check runs immediately.
    pub fn new(items: &ItemList, symmetric: bool, scheme: &dyn PlaceholderScheme) -> Self {
        let mut directed: Vec<Item> = items.iter().cloned().collect();
        if symmetric {
            directed.extend(items.iter().map(|item| item.reversed(scheme)));
        }

        let mut steps: Vec<Step> = directed.iter().map(|item| item.step1().clone()).collect();
        steps.extend(directed.iter().map(|item| item.step2().clone()));

        let conflicts = check_consistent(&directed);
        let consistent = conflicts.is_empty();
        info!(
            "built plan: {} step(s), symmetric={}, consistent={}",
            steps.len(),
            symmetric,
            consistent
        );

        Self {
            steps,
            conflicts,
            consistent,
        }
    }

    /// The ordered steps of the plan.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// All conflicts found by the consistency check, in detection order.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Whether the plan passed its consistency check.
    pub fn is_consistent(&self) -> bool {
        self.consistent
    }

    /// Apply every step, in plan order, to the given content.
    ///
    /// Content is processed line by line with terminators preserved; since
    /// pair values cannot contain newlines this is equivalent to applying
    /// each step across the whole text in turn. Refuses to run on an
    /// inconsistent plan.
    pub fn apply(&self, content: &str) -> Result<String> {
        self.ensure_consistent()?;
        let mut out = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            let mut line = line.to_string();
            for step in &self.steps {
                line = step.apply(&line);
            }
            out.push_str(&line);
        }
        Ok(out)
    }

    /// Transform one file and write the result.
    ///
    /// With `in_place` the original is overwritten; otherwise the result
    /// goes to a sibling file named `<original>.ren`. Writes go through a
    /// temp file in the destination directory followed by a rename, so a
    /// failed write never leaves a half-written output. Returns the path
    /// that was written.
    pub fn rewrite_file(&self, path: &Path, in_place: bool) -> Result<PathBuf> {
        self.ensure_consistent()?;
        debug!("processing {}", path.display());

        let content = fs::read_to_string(path).path_context(path)?;
        let transformed = self.apply(&content)?;

        let out_path = if in_place {
            path.to_path_buf()
        } else {
            suffixed_path(path)
        };
        write_atomically(&out_path, &transformed)?;
        info!("wrote {}", out_path.display());
        Ok(out_path)
    }

    fn ensure_consistent(&self) -> Result<()> {
        if self.consistent {
            Ok(())
        } else {
            Err(ReplacerError::InconsistentPlan {
                conflicts: self.conflicts.len(),
            })
        }
    }
}

/// Static interference check over the first half of the step list.
///
/// For every ordered pair of distinct first-half steps the checker sees
/// the step's source pattern and the resolved value its placeholder will
/// eventually become (placeholders themselves cannot textually collide, so
/// the raw first-phase replacement values carry no information). Two
/// intrusions are flagged, both as proper substrings only: equality is
/// exempt because symmetric mode legitimately produces a reverse step
/// whose pattern equals the forward step's replacement value.
fn check_consistent(directed: &[Item]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for (i1, a) in directed.iter().enumerate() {
        for (i2, b) in directed.iter().enumerate() {
            if i1 == i2 {
                continue;
            }
            if proper_substring(a.new_value(), b.old()) {
                conflicts.push(Conflict {
                    kind: ConflictKind::ReplacementInSource,
                    value_step: i1,
                    value: a.new_value().to_string(),
                    pattern_step: i2,
                    pattern: b.old().to_string(),
                });
            }
            if proper_substring(a.old(), b.old()) {
                conflicts.push(Conflict {
                    kind: ConflictKind::SourceInSource,
                    value_step: i1,
                    value: a.old().to_string(),
                    pattern_step: i2,
                    pattern: b.old().to_string(),
                });
            }
        }
    }
    conflicts
}

fn proper_substring(needle: &str, haystack: &str) -> bool {
    needle.len() < haystack.len() && haystack.contains(needle)
}

fn suffixed_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

fn write_atomically(out_path: &Path, content: &str) -> Result<()> {
    let dir = out_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).path_context(dir)?;
    tmp.write_all(content.as_bytes()).path_context(out_path)?;
    tmp.persist(out_path)
        .map_err(|e| ReplacerError::file_system(out_path, e.error))?;
    Ok(())
}
