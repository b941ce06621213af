//! The provisioning bundle compiled into the binary.
//!
//! `build.rs` snapshots every regular file under `data/ignition` into a
//! static table keyed by its path relative to `data/`.

use super::MemoryStore;

include!(concat!(env!("OUT_DIR"), "/embedded.rs"));

/// A store over the embedded `data/ignition` snapshot.
pub fn embedded_store() -> MemoryStore {
    MemoryStore::from_static(EMBEDDED_FILES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ByteStore, FILES_ROOT, UNITS_ROOT};

    #[test]
    fn test_embedded_bundle_has_both_roots() {
        let store = embedded_store();
        assert!(!store.is_empty());
        assert!(!store.list(FILES_ROOT).unwrap().is_empty());
        assert!(!store.list(UNITS_ROOT).unwrap().is_empty());
    }

    #[test]
    fn test_embedded_keys_are_relative_to_data_dir() {
        assert!(EMBEDDED_FILES
            .iter()
            .all(|(path, _)| path.starts_with("ignition/")));
    }
}
