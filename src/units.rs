//! Systemd unit collection.

use log::debug;

use crate::error::{Error, Result};
use crate::store::{join_path, ByteStore, UNITS_ROOT};

/// A systemd unit to install and enable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRecord {
    /// Unit file name as found in the bundle, e.g. `agent.service`.
    pub name: String,
    pub enabled: bool,
    pub content: String,
}

/// Collect every unit in [`UNITS_ROOT`].
pub fn collect_units<S: ByteStore + ?Sized>(store: &S) -> Result<Vec<UnitRecord>> {
    collect_units_at(store, UNITS_ROOT)
}

/// Collect the units in the flat directory `dir`, in listing order.
///
/// Entries are not inspected: a subdirectory is read like a file and the
/// resulting failure aborts collection. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD.
pub fn collect_units_at<S: ByteStore + ?Sized>(store: &S, dir: &str) -> Result<Vec<UnitRecord>> {
    let entries = store
        .list(dir)
        .map_err(|e| Error::directory_read(dir, e))?;

    let mut units = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = join_path(&[dir, entry.name.as_str()]);
        let bytes = store
            .read(&path)
            .map_err(|e| Error::file_read(path.as_str(), e))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();

        debug!("collected unit {}", entry.name);
        units.push(UnitRecord {
            name: entry.name,
            enabled: true,
            content,
        });
    }
    Ok(units)
}
