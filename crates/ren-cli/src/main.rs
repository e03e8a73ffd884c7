//! Ren CLI Application
//!
//! Command-line interface for the Ren collision-safe string
//! replacer/swapper.

mod args;
mod cli;

use anyhow::Result;
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        pairs_file,
        files,
        swap,
        inplace,
    } = Args::parse();

    let cli = Cli::from_pairs_file(&pairs_file, swap)?;
    info!("Ren started");

    cli.show_plan();
    cli.replace_in_files(&files, inplace)
}
