//! Ignition config assembly.
//!
//! Pipeline: identity (with an optional SSH key), then files, then units,
//! then JSON. The first collector error aborts the build.

use std::path::PathBuf;

use log::info;

use crate::error::Result;
use crate::files::collect_files;
use crate::ignition::{Config, PasswdUser};
use crate::ssh::{discover_ssh_key, ssh_key_from_home};
use crate::store::ByteStore;
use crate::units::collect_units;

/// The only user the config creates.
pub const CORE_USER: &str = "core";

/// Where the `core` user's SSH key is looked up.
#[derive(Debug, Clone)]
enum KeyHome {
    /// Home directory of the invoking user, resolved at build time.
    Invoking,
    /// A fixed directory, or none at all.
    Fixed(Option<PathBuf>),
}

/// Builds an Ignition config from a [`ByteStore`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder<S> {
    store: S,
    key_home: KeyHome,
}

impl<S: ByteStore> ConfigBuilder<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key_home: KeyHome::Invoking,
        }
    }

    /// Look up the SSH key under `home` instead of the invoking user's home.
    /// `None` behaves like a user without a home directory.
    pub fn with_home_dir(mut self, home: Option<PathBuf>) -> Self {
        self.key_home = KeyHome::Fixed(home);
        self
    }

    /// Assemble the config document without serializing it.
    pub fn config(&self) -> Result<Config> {
        let ssh_key = match &self.key_home {
            KeyHome::Invoking => discover_ssh_key(),
            KeyHome::Fixed(home) => ssh_key_from_home(home.as_deref()),
        };

        let mut config = Config::new();
        config.passwd.users.push(PasswdUser {
            name: CORE_USER.to_string(),
            ssh_authorized_keys: ssh_key.into_iter().collect(),
        });

        config.storage.files = collect_files(&self.store)?
            .into_iter()
            .map(Into::into)
            .collect();
        config.systemd.units = collect_units(&self.store)?
            .into_iter()
            .map(Into::into)
            .collect();

        info!(
            "assembled ignition config: {} files, {} units",
            config.storage.files.len(),
            config.systemd.units.len()
        );
        Ok(config)
    }

    /// Build the config as compact JSON.
    pub fn build(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.config()?)?)
    }

    /// Build the config as indented JSON.
    pub fn build_pretty(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.config()?)?)
    }
}
