//! File collection: flattens the bundle's file tree into Ignition file entries.

use log::debug;

use crate::error::{Error, Result};
use crate::store::{basename, join_path, ByteStore, FILES_ROOT};

/// Mode for files under a `bin` or `dispatcher.d` directory.
pub const MODE_EXECUTABLE: u32 = 0o555;

/// Mode for every other file.
pub const MODE_PRIVATE: u32 = 0o600;

/// Parent directory names whose files are made executable.
const EXECUTABLE_DIRS: &[&str] = &["bin", "dispatcher.d"];

/// A file to be written on the target machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path on the target, e.g. `/etc/foo.conf`.
    pub path: String,
    pub mode: u32,
    /// Raw bytes from the store.
    pub content: Vec<u8>,
}

/// Permission mode for a file living in the logical directory `dir`.
///
/// Only the immediate parent's basename matters, so `/opt/tool/bin/run`
/// is executable just like `/usr/local/bin/run`.
pub fn mode_for_dir(dir: &str) -> u32 {
    if EXECUTABLE_DIRS.contains(&basename(dir)) {
        MODE_EXECUTABLE
    } else {
        MODE_PRIVATE
    }
}

/// Collect every file under [`FILES_ROOT`].
pub fn collect_files<S: ByteStore + ?Sized>(store: &S) -> Result<Vec<FileRecord>> {
    collect_files_at(store, FILES_ROOT)
}

/// Collect every file under `root`, depth-first in listing order.
///
/// Subdirectories are expanded in place before later siblings. Record paths
/// are relative to `root` with a leading `/`. The first listing or read
/// failure aborts the walk and no records are returned.
pub fn collect_files_at<S: ByteStore + ?Sized>(store: &S, root: &str) -> Result<Vec<FileRecord>> {
    let mut files = Vec::new();
    walk(store, root, "/", &mut files)?;
    Ok(files)
}

fn walk<S: ByteStore + ?Sized>(
    store: &S,
    root: &str,
    dir: &str,
    files: &mut Vec<FileRecord>,
) -> Result<()> {
    let entries = store
        .list(&join_path(&[root, dir]))
        .map_err(|e| Error::directory_read(dir, e))?;

    for entry in entries {
        let path = join_path(&[dir, entry.name.as_str()]);
        if entry.is_dir {
            walk(store, root, &path, files)?;
            continue;
        }

        let content = store
            .read(&join_path(&[root, path.as_str()]))
            .map_err(|e| Error::file_read(path.as_str(), e))?;
        let mode = mode_for_dir(dir);
        debug!("collected file {} (mode {:o}, {} bytes)", path, mode, content.len());
        files.push(FileRecord { path, mode, content });
    }
    Ok(())
}
