//! CLI command handlers.
//!
//! - `ignition` - Build the Ignition config
//! - `show` - Display configuration and bundle contents

pub mod ignition;
pub mod show;

pub use ignition::cmd_ignition;
pub use show::cmd_show;

use fleeting::config::CliConfig;
use fleeting::{embedded_store, ByteStore, DirStore};

/// Open the bundle selected by the configuration.
pub fn open_store(config: &CliConfig) -> Box<dyn ByteStore> {
    match &config.data_dir {
        Some(dir) => {
            log::debug!("using on-disk bundle at {}", dir.display());
            Box::new(DirStore::new(dir))
        }
        None => Box::new(embedded_store()),
    }
}
