use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context as _, Result};
use clap::Parser;
use spr_rotate::{rewrite, Rewrite};

/// Convert bytes in a horizontal sprite file to vertical sprites.
///
/// Every `{ 0x.., 0x.., ... }` group of exactly 8 hex bytes in the file is
/// rotated in place. We use vertical sprites, which aren't the standard, so
/// run this over anyone else's sprite data before using it.
#[derive(Parser)]
#[command()]
struct Args {
    /// Path to file to change.
    #[arg()]
    filename: PathBuf,

    /// Print the converted file to stdout instead of overwriting it.
    #[arg(long)]
    dry_run: bool,

    /// Report how many sprites were converted.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let content = fs::read_to_string(&args.filename)
        .with_context(|| format!("failed to read {}", args.filename.display()))?;

    let Rewrite { text, sprites } = rewrite(&content)?;

    if args.dry_run {
        io::stdout().write_all(text.as_bytes())?;
    } else {
        fs::write(&args.filename, text)
            .with_context(|| format!("failed to write {}", args.filename.display()))?;
    }

    if args.verbose {
        let s = if sprites == 1 { "" } else { "s" };
        eprintln!("{}: rotated {sprites} sprite{s}", args.filename.display());
    }

    Ok(())
}
