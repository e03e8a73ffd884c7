//! Parsing of the pairs file describing substitutions.
//!
//! The format is one pair per non-blank line, exactly two fields separated
//! by a single space: `<old> <new>`. Blank lines are skipped; any other
//! field count fails the whole file.

use std::fs;
use std::path::Path;

use crate::error::{IoResultExt, ReplacerError, Result};

/// Parse pairs from already-loaded text.
///
/// Line numbers in errors are 1-based and count every line of the input,
/// including blank ones.
pub fn parse_pairs(input: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for (index, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(' ').collect();
        if fields.len() != 2 {
            return Err(ReplacerError::MalformedPairs {
                line: index + 1,
                reason: format!(
                    "expected 2 space-separated fields, found {}",
                    fields.len()
                ),
            });
        }
        pairs.push((fields[0].to_string(), fields[1].to_string()));
    }
    Ok(pairs)
}

/// Read and parse a pairs file from disk.
pub fn read_pairs_file(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path).path_context(path)?;
    parse_pairs(&content)
}
