//! Read-only hierarchical byte stores.
//!
//! The collectors only see the [`ByteStore`] trait. Three stores ship with
//! the crate:
//! - `MemoryStore`: an in-memory map, used by tests and by the embedded bundle
//! - `embedded_store()`: the `data/ignition` snapshot compiled into the binary
//! - `DirStore`: an on-disk tree, for building from a checkout without recompiling

pub mod disk;
pub mod embedded;
pub mod memory;

use std::io;

pub use disk::DirStore;
pub use embedded::embedded_store;
pub use memory::MemoryStore;

/// Store root of the file tree written to the target machine.
pub const FILES_ROOT: &str = "ignition/files";

/// Store directory holding systemd unit definitions (flat).
pub const UNITS_ROOT: &str = "ignition/systemd/units";

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// A read-only store keyed by slash-separated paths.
///
/// Implementations must be deterministic: listing the same path twice
/// returns the same entries in the same order.
pub trait ByteStore {
    /// List the children of the directory at `path`.
    fn list(&self, path: &str) -> io::Result<Vec<DirEntry>>;

    /// Read the bytes of the file at `path`.
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;
}

impl<S: ByteStore + ?Sized> ByteStore for &S {
    fn list(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        (**self).list(path)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

impl<S: ByteStore + ?Sized> ByteStore for Box<S> {
    fn list(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        (**self).list(path)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

/// Join path segments with `/`, dropping empty segments and redundant slashes.
///
/// `join_path(&["ignition/files", "/etc"])` is `"ignition/files/etc"`, and
/// joining onto `"/"` keeps a leading slash: `join_path(&["/", "etc"])` is `"/etc"`.
pub fn join_path(parts: &[&str]) -> String {
    let absolute = parts.first().is_some_and(|p| p.starts_with('/'));
    let joined = parts
        .iter()
        .flat_map(|p| p.split('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if absolute {
        format!("/{}", joined)
    } else {
        joined
    }
}

/// Last segment of a slash-separated path, or `""` for the root.
pub fn basename(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

pub(crate) fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{}: no such file or directory", path))
}
