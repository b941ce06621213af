//! In-memory byte store.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io;

use super::{not_found, ByteStore, DirEntry};

/// A byte store backed by a path→bytes map.
///
/// Only files are stored; a directory exists when some file lives beneath
/// it. Listings are sorted by child name.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, Cow<'static, [u8]>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store that borrows a static table without copying it.
    pub fn from_static(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        let files = entries
            .iter()
            .map(|(path, bytes)| (normalize(path), Cow::Borrowed(*bytes)))
            .collect();
        Self { files }
    }

    /// Add (or replace) a file.
    pub fn insert(&mut self, path: &str, content: impl Into<Vec<u8>>) {
        self.files
            .insert(normalize(path), Cow::Owned(content.into()));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn children(&self, dir: &str) -> BTreeMap<String, bool> {
        let mut children = BTreeMap::new();
        for key in self.files.keys() {
            let rest = if dir.is_empty() {
                key.as_str()
            } else {
                match key.strip_prefix(dir).and_then(|r| r.strip_prefix('/')) {
                    Some(rest) => rest,
                    None => continue,
                }
            };
            match rest.split_once('/') {
                Some((name, _)) => {
                    children.insert(name.to_string(), true);
                }
                None => {
                    children.entry(rest.to_string()).or_insert(false);
                }
            }
        }
        children
    }
}

impl ByteStore for MemoryStore {
    fn list(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let dir = normalize(path);
        if self.files.contains_key(&dir) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: not a directory", path),
            ));
        }
        let children = self.children(&dir);
        if children.is_empty() && !dir.is_empty() {
            return Err(not_found(path));
        }
        Ok(children
            .into_iter()
            .map(|(name, is_dir)| DirEntry { name, is_dir })
            .collect())
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        let key = normalize(path);
        match self.files.get(&key) {
            Some(bytes) => Ok(bytes.to_vec()),
            None if !self.children(&key).is_empty() => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: is a directory", path),
            )),
            None => Err(not_found(path)),
        }
    }
}

fn normalize(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
