//! Fleeting: first-boot Ignition config assembly.
//!
//! Collects a bundle of files and systemd units from a [`store::ByteStore`]
//! and assembles them, together with the invoking user's SSH key, into an
//! Ignition config for the `core` user.
//!
//! ```rust,ignore
//! use fleeting::{embedded_store, ConfigBuilder};
//!
//! let json = ConfigBuilder::new(embedded_store()).build()?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod files;
pub mod ignition;
pub mod ssh;
pub mod store;
pub mod units;

pub use builder::{ConfigBuilder, CORE_USER};
pub use error::{Error, Result};
pub use files::{collect_files, FileRecord, MODE_EXECUTABLE, MODE_PRIVATE};
pub use ignition::IGNITION_VERSION;
pub use ssh::discover_ssh_key;
pub use store::{embedded_store, ByteStore, DirStore, MemoryStore};
pub use units::{collect_units, UnitRecord};
