//! Configuration for the fleeting CLI.
//!
//! Read from environment variables; `main` loads a `.env` file first so
//! real environment variables take precedence over it.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::ssh::{discover_ssh_key, SSH_PUBKEY_PATH};

/// Environment variable selecting an on-disk bundle instead of the embedded one.
pub const DATA_DIR_VAR: &str = "FLEETING_DATA_DIR";

/// Environment variable selecting the output file (stdout when unset).
pub const OUTPUT_VAR: &str = "FLEETING_OUTPUT";

/// Fleeting configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory containing `ignition/files` and `ignition/systemd/units`.
    /// `None` means the bundle compiled into the binary.
    pub data_dir: Option<PathBuf>,
    /// Where to write the generated config. `None` means stdout.
    pub output: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Build configuration from a variable map. Empty values count as unset.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let path_var = |key: &str| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };

        Self {
            data_dir: path_var(DATA_DIR_VAR),
            output: path_var(OUTPUT_VAR),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        if output.is_some() {
            self.output = output;
        }
        self
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        match &self.data_dir {
            Some(dir) => println!("  {}: {}", DATA_DIR_VAR, dir.display()),
            None => println!("  {}: (unset, using embedded bundle)", DATA_DIR_VAR),
        }
        match &self.output {
            Some(path) => println!("  {}: {}", OUTPUT_VAR, path.display()),
            None => println!("  {}: (unset, writing to stdout)", OUTPUT_VAR),
        }
        if discover_ssh_key().is_some() {
            println!("  SSH key: FOUND (~/{})", SSH_PUBKEY_PATH);
        } else {
            println!("  SSH key: NOT FOUND (~/{}), core user gets no key", SSH_PUBKEY_PATH);
        }
    }
}
