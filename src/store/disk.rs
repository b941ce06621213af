//! On-disk byte store.

use std::fs;
use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

use super::{ByteStore, DirEntry};

/// A byte store over a directory tree on disk.
///
/// Store paths are resolved relative to `root`. Listings are sorted by file
/// name so the output matches the embedded bundle built from the same tree.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|s| !s.is_empty())
            .fold(self.root.clone(), |acc, seg| acc.join(seg))
    }
}

impl ByteStore for DirStore {
    fn list(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let dir = self.resolve(path);
        if !fs::metadata(&dir)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: not a directory", dir.display()),
            ));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type().is_dir(),
            });
        }
        Ok(entries)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dir_store_lists_sorted_and_reads() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("ignition/files/etc");
        fs::create_dir_all(base.join("sub")).unwrap();
        fs::write(base.join("zeta.conf"), "z").unwrap();
        fs::write(base.join("alpha.conf"), "a").unwrap();

        let store = DirStore::new(temp.path());
        let entries = store.list("ignition/files/etc").unwrap();
        assert_eq!(
            entries,
            vec![
                DirEntry::file("alpha.conf"),
                DirEntry::dir("sub"),
                DirEntry::file("zeta.conf"),
            ]
        );
        assert_eq!(store.read("/ignition/files/etc/zeta.conf").unwrap(), b"z");
    }

    #[test]
    fn test_dir_store_missing_and_non_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("plain"), "x").unwrap();
        let store = DirStore::new(temp.path());

        assert_eq!(
            store.list("missing").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        assert!(store.list("plain").is_err());
        assert!(store.read(".").is_err());
    }
}
