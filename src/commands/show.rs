//! Show command - displays information.

use anyhow::{Context, Result};

use fleeting::config::CliConfig;
use fleeting::{collect_files, collect_units};

use super::open_store;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// Show the files and units that would be provisioned
    Files,
}

/// Execute the show command.
pub fn cmd_show(config: &CliConfig, target: ShowTarget) -> Result<()> {
    match target {
        ShowTarget::Config => config.print(),
        ShowTarget::Files => {
            let store = open_store(config);
            let files = collect_files(&store).context("Failed to collect files")?;
            let units = collect_units(&store).context("Failed to collect units")?;

            println!("Files ({}):", files.len());
            for file in &files {
                println!("  {:04o}  {}  ({} bytes)", file.mode, file.path, file.content.len());
            }
            println!("Units ({}):", units.len());
            for unit in &units {
                println!("  {}{}", unit.name, if unit.enabled { "  [enabled]" } else { "" });
            }
        }
    }
    Ok(())
}
