//! Ignition command - builds the config and writes it out.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};

use fleeting::config::CliConfig;
use fleeting::ConfigBuilder;

use super::open_store;

/// Execute the ignition command.
pub fn cmd_ignition(config: &CliConfig, pretty: bool) -> Result<()> {
    let builder = ConfigBuilder::new(open_store(config));
    let json = if pretty {
        builder.build_pretty()
    } else {
        builder.build()
    }
    .context("Failed to build ignition config")?;

    match &config.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote ignition config to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&json).context("Failed to write to stdout")?;
            if pretty {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}
