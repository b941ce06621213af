//! Shared test utilities for fleeting tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fleeting::ignition::{decode_data_url, Config, File};
use fleeting::store::{ByteStore, DirEntry};
use fleeting::MemoryStore;
use tempfile::TempDir;

pub const FOO_CONF: &[u8] = b"hello";
pub const LAUNCH_SCRIPT: &[u8] = b"#!/bin/sh\necho hi";
pub const FOO_SERVICE: &str = "[Unit]\nDescription=Foo\n\n[Service]\nExecStart=/usr/local/bin/launch\n";
pub const TEST_KEY: &str = "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQC test@example\n";

/// The two-file, one-unit bundle used by the end-to-end scenario.
pub fn scenario_store() -> MemoryStore {
    MemoryStore::new()
        .with_file("ignition/files/etc/foo.conf", FOO_CONF)
        .with_file("ignition/files/usr/local/bin/launch", LAUNCH_SCRIPT)
        .with_file("ignition/systemd/units/foo.service", FOO_SERVICE)
}

/// A deeper bundle exercising every branch of the mode policy.
pub fn nested_store() -> MemoryStore {
    MemoryStore::new()
        .with_file("ignition/files/bin/top", "top")
        .with_file("ignition/files/etc/NetworkManager/dispatcher.d/30-dns", "dns")
        .with_file("ignition/files/etc/NetworkManager/NetworkManager.conf", "nm")
        .with_file("ignition/files/etc/motd", "motd")
        .with_file("ignition/files/opt/tool/bin/run", "run")
        .with_file("ignition/files/opt/tool/bin/lib/helper", "helper")
        .with_file("ignition/files/opt/tool/readme", "readme")
        .with_file("ignition/files/rootfile", "root")
        .with_file("ignition/systemd/units/a.service", "[Unit]\n")
        .with_file("ignition/systemd/units/b.timer", "[Timer]\n")
}

/// Wraps a store and fails every listing of one path.
pub struct FailingListStore<S> {
    pub inner: S,
    pub fail_on: String,
}

impl<S: ByteStore> ByteStore for FailingListStore<S> {
    fn list(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        if path == self.fail_on {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "injected"));
        }
        self.inner.list(path)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        self.inner.read(path)
    }
}

/// Wraps a store and fails every read of one path.
pub struct FailingReadStore<S> {
    pub inner: S,
    pub fail_on: String,
}

impl<S: ByteStore> ByteStore for FailingReadStore<S> {
    fn list(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        self.inner.list(path)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        if path == self.fail_on {
            return Err(io::Error::new(io::ErrorKind::Other, "injected"));
        }
        self.inner.read(path)
    }
}

/// A store whose listings come back in a fixed, unsorted order.
///
/// Counts calls so tests can check that traversal stops at the first error.
pub struct OrderedStore {
    pub dirs: Vec<(&'static str, Vec<DirEntry>)>,
    pub files: Vec<(&'static str, &'static [u8])>,
    pub calls: Cell<usize>,
}

impl ByteStore for OrderedStore {
    fn list(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        self.calls.set(self.calls.get() + 1);
        self.dirs
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, entries)| entries.clone())
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        self.files
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, bytes)| bytes.to_vec())
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

/// A temporary home directory, optionally holding `.ssh/id_rsa.pub`.
pub struct TestHome {
    pub _temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestHome {
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    pub fn with_key(key: &str) -> Self {
        let home = Self::empty();
        write_file(&home.path.join(".ssh/id_rsa.pub"), key.as_bytes());
        home
    }
}

/// Write a file, creating parent directories.
pub fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Lay out a store's files on disk under `root`.
pub fn materialize(root: &Path, files: &[(&str, &[u8])]) {
    for (path, content) in files {
        write_file(&root.join(path), content);
    }
}

/// Find a file entry by path, panicking with the available paths if missing.
pub fn file_entry<'a>(config: &'a Config, path: &str) -> &'a File {
    config
        .storage
        .files
        .iter()
        .find(|f| f.path == path)
        .unwrap_or_else(|| {
            let paths: Vec<_> = config.storage.files.iter().map(|f| &f.path).collect();
            panic!("No file entry for {}; have {:?}", path, paths)
        })
}

/// Decode the inline contents of a file entry.
pub fn decoded_contents(file: &File) -> Vec<u8> {
    let source = file
        .contents
        .source
        .as_deref()
        .unwrap_or_else(|| panic!("File {} has no contents source", file.path));
    decode_data_url(source)
        .unwrap_or_else(|| panic!("File {} has a malformed data URL: {}", file.path, source))
}
