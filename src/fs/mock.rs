// src/fs/mock.rs

use super::{EntryKind, FileSystem};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(SystemTime),
    Dir(Vec<String>), // List of child names
    /// Listed by its parent but unreadable, e.g. a permission-denied
    /// directory or a dangling symlink.
    Unreadable,
}

/// In-memory filesystem for scan tests.
///
/// Cloning shares the underlying tree, so a test can keep a handle and
/// touch files while a monitor owns another clone.
#[derive(Debug, Clone)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
    reads: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut files = HashMap::new();
        // Ensure root exists
        files.insert(PathBuf::from("."), MockEntry::Dir(Vec::new()));

        Self {
            files: Arc::new(Mutex::new(files)),
            reads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add (or re-touch) a file with the given modification time.
    pub fn add_file(&self, path: impl AsRef<Path>, mtime: SystemTime) {
        self.insert(path.as_ref(), MockEntry::File(mtime));
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        ensure_dir_entry(&mut files, path.as_ref());
    }

    /// Add an entry that shows up in its parent listing but fails on access.
    pub fn add_unreadable(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), MockEntry::Unreadable);
    }

    /// Remove the entry itself but keep the name in its parent's listing,
    /// as if it vanished between `read_dir` and `stat`.
    pub fn vanish(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        files.remove(path.as_ref());
    }

    /// Paths whose modification time has been queried, in order.
    pub fn mtime_reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }

    fn insert(&self, path: &Path, entry: MockEntry) {
        let path = path.to_path_buf();
        let mut files = self.files.lock().unwrap();
        files.insert(path.clone(), entry);

        // Ensure parent directories exist implicitly for simplicity in this mock
        if let Some(parent) = path.parent() {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };

            ensure_dir_entry(&mut files, parent);
            add_child(&mut files, parent, &path);
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_dir_entry(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    if files.contains_key(path) {
        return;
    }
    files.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));

    if let Some(parent) = path.parent() {
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };

        if parent != path {
            // Avoid infinite loop at root
            ensure_dir_entry(files, parent);
            add_child(files, parent, path);
        }
    }
}

fn add_child(files: &mut HashMap<PathBuf, MockEntry>, parent: &Path, child: &Path) {
    if let Some(MockEntry::Dir(children)) = files.get_mut(parent) {
        if let Some(name) = child.file_name().and_then(|n| n.to_str()) {
            if !children.iter().any(|c| c == name) {
                children.push(name.to_string());
            }
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            Some(MockEntry::Unreadable) => Err(anyhow!("Permission denied: {:?}", path)),
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }

    fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some(MockEntry::File(_)) => Ok(EntryKind::File),
            Some(MockEntry::Dir(_)) => Ok(EntryKind::Dir),
            // Report it as a directory so the scan has to cope with the
            // failing `read_dir`.
            Some(MockEntry::Unreadable) => Ok(EntryKind::Dir),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some(MockEntry::File(mtime)) => Ok(*mtime),
            Some(_) => Err(anyhow!("Not a file: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }
}
