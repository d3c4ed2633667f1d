// src/watch/scan.rs

//! Recursive tree scan with short-circuit on the first recent match.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::fs::{EntryKind, FileSystem};
use crate::watch::patterns::NamePattern;
use crate::watch::recency::RecencyWindow;

/// Walk the tree under `root` and return the first file whose base name
/// matches `pattern` and whose mtime falls inside `window` at `now`.
///
/// - Directories are visited depth-first; order within a directory is
///   whatever the filesystem returns.
/// - Symlinks to directories are never descended.
/// - Unreadable directories and entries that vanish mid-scan are skipped.
/// - Scanning stops at the first hit; the rest of the tree is not listed.
pub fn find_recent_match(
    fs: &dyn FileSystem,
    root: &Path,
    pattern: &NamePattern,
    window: &RecencyWindow,
    now: SystemTime,
) -> Option<PathBuf> {
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = match fs.read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %dir.display(), error = %err, "skipping unreadable directory");
                continue;
            }
        };

        for path in entries {
            let kind = match fs.entry_kind(&path) {
                Ok(kind) => kind,
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "skipping entry");
                    continue;
                }
            };

            match kind {
                EntryKind::Dir => stack.push(path),
                EntryKind::File => {
                    if is_recent_match(fs, &path, pattern, window, now) {
                        return Some(path);
                    }
                }
                EntryKind::Other => {}
            }
        }
    }

    None
}

fn is_recent_match(
    fs: &dyn FileSystem,
    path: &Path,
    pattern: &NamePattern,
    window: &RecencyWindow,
    now: SystemTime,
) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    if !pattern.matches(&name.to_string_lossy()) {
        return false;
    }

    match fs.modified(path) {
        Ok(mtime) => window.contains(mtime, now),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "file vanished before stat; skipping");
            false
        }
    }
}
