use std::path::PathBuf;

use clap::Parser;

/// Main command-line interface for the Ren string replacer/swapper
///
/// Ren performs batch, collision-safe literal string substitution across
/// text files. Substitution pairs are read from a pairs file and applied in
/// a single planned pass, so many replacements never interfere with each
/// other; with `--swap` both directions are applied simultaneously, making
/// `old <-> new` exchanges safe.
#[derive(Parser)]
#[command(version, about, name = "ren")]
pub struct Args {
    /// File with strings to be replaced, one `<old> <new>` pair per line
    pub pairs_file: PathBuf,

    /// File(s) to be processed
    pub files: Vec<PathBuf>,

    /// Also apply the reverse direction, swapping old and new
    /// simultaneously
    #[arg(short, long)]
    pub swap: bool,

    /// Overwrite the processed files instead of writing `<file>.ren`
    /// siblings
    #[arg(short, long)]
    pub inplace: bool,
}
