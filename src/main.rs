//! Fleeting - first-boot Ignition config builder.
//!
//! Packs the bundled files and systemd units, plus the invoking user's SSH
//! key, into an Ignition config for the `core` user.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fleeting::config::CliConfig;

#[derive(Parser)]
#[command(name = "fleeting")]
#[command(about = "First-boot Ignition config builder")]
#[command(
    after_help = "QUICK START:\n  fleeting ignition -o config.ign  Build the config\n  fleeting show files              List what will be provisioned\n  fleeting show config             Show resolved configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the Ignition config (JSON)
    Ignition {
        /// Output file (default: $FLEETING_OUTPUT, else stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,

        /// Read the bundle from this directory instead of the embedded copy
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,

        /// Read the bundle from this directory instead of the embedded copy
        #[arg(long, global = true)]
        data_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// List the files and units that will be provisioned
    Files,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = CliConfig::load();

    match cli.command {
        Commands::Ignition {
            output,
            pretty,
            data_dir,
        } => {
            let config = config.with_overrides(data_dir, output);
            commands::cmd_ignition(&config, pretty)?;
        }

        Commands::Show { what, data_dir } => {
            let config = config.with_overrides(data_dir, None);
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Files => commands::show::ShowTarget::Files,
            };
            commands::cmd_show(&config, show_target)?;
        }
    }

    Ok(())
}
