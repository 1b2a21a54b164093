// Command-line front end: reads JSON share-set files named on the
// command line and prints the reconstructed secret for each.  All the
// real work happens in the library; this is just the provider and the
// sink.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use polyrecover::{reconstruct, ShareCollection};

#[derive(Parser, Debug)]
#[command(about = "Recover a shared secret from JSON share-set files")]
struct Args {
    /// JSON files, each holding one share set.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print only the secret, one line per file.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut failed = false;
    for path in &args.files {
        if let Err(e) = process(path, args.quiet) {
            eprintln!("error processing {}: {:#}", path.display(), e);
            failed = true;
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn process(path: &Path, quiet: bool) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let set: ShareCollection =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    let result = reconstruct(&set)?;

    if quiet {
        println!("{}", result.secret);
        return Ok(());
    }
    println!("{}:", path.display());
    for p in &result.points {
        println!("  share {}: ({}, {})", p.id, p.x, p.y);
    }
    println!("  secret = {}", result.secret);
    Ok(())
}
