// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};

pub mod mock;

/// What a directory entry is, as far as the tree scan cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A real directory (never a symlink to one).
    Dir,
    /// A regular file, or a symlink resolving to one.
    File,
    /// Anything else: sockets, fifos, symlinks to directories.
    Other,
}

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    /// Return a list of entries in a directory.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Classify an entry without following directory symlinks.
    fn entry_kind(&self, path: &Path) -> Result<EntryKind>;

    /// Last modification time, following symlinks.
    fn modified(&self, path: &Path) -> Result<SystemTime>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            let entry = entry.with_context(|| format!("reading entry in {:?}", path))?;
            entries.push(entry.path());
        }
        Ok(entries)
    }

    fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let meta = fs::symlink_metadata(path)
            .with_context(|| format!("reading metadata of {:?}", path))?;
        let ft = meta.file_type();

        if ft.is_symlink() {
            // Symlinked directories are not descended; that keeps link
            // cycles out of the walk.
            let target = fs::metadata(path)
                .with_context(|| format!("resolving symlink {:?}", path))?;
            return Ok(if target.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            });
        }

        Ok(if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        })
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        fs::metadata(path)
            .and_then(|m| m.modified())
            .with_context(|| format!("reading mtime of {:?}", path))
    }
}
