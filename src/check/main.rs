//! Pre-flight auditor: verifies that every image a manifest references
//! exists on disk. No network, no credentials — purely diagnostic.

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::{Path, PathBuf};

use pinbatch::manifest;

#[derive(Parser, Debug)]
#[command(
    name = "pinbatch-check",
    version,
    about = "Check that every image file referenced by a pin manifest exists on disk"
)]
struct Cli {
    /// Manifest file to audit
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    // Usage errors share the exit code of the missing-file case: anything
    // other than a clean all-found run exits 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };
    let items = manifest::read_manifest(&cli.manifest)?;

    let mut missing = 0usize;
    for item in &items {
        if Path::new(&item.file_path).exists() {
            println!("found:   {}", item.file_path);
        } else {
            println!("MISSING: {}", item.file_path);
            missing += 1;
        }
    }

    if missing > 0 {
        anyhow::bail!("{missing} of {} referenced file(s) missing", items.len());
    }

    println!("All {} image files found", items.len());
    Ok(())
}
