//! Configs command implementation

use anyhow::Result;
use clap::Args;

use crate::config::{CamConfig, ConfigCatalog};

#[derive(Args)]
pub struct ConfigsArgs {
    /// Load every config and report the ones that fail to parse
    #[arg(long)]
    pub check: bool,
}

pub fn run(args: ConfigsArgs) -> Result<()> {
    let catalog = ConfigCatalog::bundled();
    println!("Config directory: {}", catalog.root().display());

    if catalog.is_empty() {
        println!("No configs found.");
        return Ok(());
    }

    let width = catalog.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut failures = 0usize;
    for (name, path) in catalog.iter() {
        if !args.check {
            println!("  {:<width$}  {}", name, path.display());
            continue;
        }
        match CamConfig::load(path) {
            Ok(_) => println!("  {:<width$}  ok", name),
            Err(e) => {
                failures += 1;
                tracing::debug!("{:?}", e);
                println!("  {:<width$}  FAILED: {}", name, e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} configs failed to load", failures, catalog.len());
    }
    Ok(())
}
