//! CLI driver: builds the plan from the pairs file and applies it.
//!
//! This layer keeps clap concerns in [`crate::args`] and core semantics in
//! `ren-core`; it only wires the two together and owns the output to
//! stdout/stderr.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{info, warn};
use ren_core::{read_pairs_file, BracketTag, Conflicts, ItemList, Plan, PlanListing};

/// Command-line driver wrapping a constructed plan.
pub struct Cli {
    plan: Plan,
}

impl Cli {
    /// Read the pairs file and construct the plan.
    ///
    /// `swap` enables symmetric mode: both `old -> new` and `new -> old`
    /// are planned together.
    pub fn from_pairs_file(path: &Path, swap: bool) -> Result<Self> {
        let pairs = read_pairs_file(path)
            .with_context(|| format!("Failed to read pairs file '{}'", path.display()))?;
        let items = ItemList::from_pairs(&pairs, &BracketTag)
            .context("Invalid substitution pairs")?;
        let plan = Plan::new(&items, swap, &BracketTag);
        Ok(Self { plan })
    }

    /// Print the ordered step listing. Always shown before any file is
    /// touched.
    pub fn show_plan(&self) {
        print!("{}", PlanListing(&self.plan));
    }

    /// Apply the plan to each target file in order.
    ///
    /// Refuses to touch any file if the plan is inconsistent, printing the
    /// conflict report first. Prints one `Wrote <path>` line per output
    /// file.
    pub fn replace_in_files(&self, files: &[PathBuf], in_place: bool) -> Result<()> {
        if !self.plan.is_consistent() {
            warn!(
                "plan rejected with {} conflict(s)",
                self.plan.conflicts().len()
            );
            eprint!("{}", Conflicts(self.plan.conflicts()));
            bail!("strings are NOT consistent -- will not replace");
        }
        for file in files {
            let written = self
                .plan
                .rewrite_file(file, in_place)
                .with_context(|| format!("Failed to process '{}'", file.display()))?;
            println!("Wrote {}", written.display());
        }
        info!("processed {} file(s)", files.len());
        Ok(())
    }
}
