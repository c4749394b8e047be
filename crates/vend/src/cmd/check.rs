//! Check command - validate the snapshot on disk

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vend_config::Config;
use vend_dataset::SalesStore;

/// Check command arguments
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Snapshot directory (overrides the configured path)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Run the check command
pub fn run(args: CheckArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => {
            let config = match args.config {
                Some(path) => Config::from_file(&path).context("failed to load configuration")?,
                None => Config::default(),
            };
            config.dataset.path
        }
    };

    let store = SalesStore::new(path.clone());
    let frame = store
        .frame()
        .with_context(|| format!("snapshot at {} is not usable", path.display()))?;

    println!(
        "snapshot ok: {} rows, {} columns",
        frame.height(),
        frame.width()
    );
    for column in frame.get_column_names() {
        println!("  - {}", column);
    }

    Ok(())
}
