//! Filesystem persistence for journal entries.
//!
//! Every entry lives in its own pretty-printed JSON file under
//! `{root}/YYYY/MM/DD/YYYYMMDD-HHMMSS.json`, named after its publish time.

use crate::config::Config;
use crate::entry::Entry;
use crate::error::{Result, StoreError};
use crate::paths::{entry_path, scan_dir_for_json_files};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Maps entries to and from the journal directory tree.
///
/// The store never touches the environment; its root is fixed at construction.
#[derive(Debug, Clone)]
pub struct Store {
    base_dir: PathBuf,
}

impl Store {
    /// Creates a store rooted at the configured journal directory.
    ///
    /// Nothing is created on disk until the first [`Store::save`].
    pub fn new(config: &Config) -> Self {
        Self::with_base(config.journal_dir.clone())
    }

    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Where `entry` is (or would be) stored.
    pub fn entry_path(&self, entry: &Entry) -> PathBuf {
        entry_path(&self.base_dir, &entry.publish_time)
    }

    /// Persists `entry` and returns the path of the written file.
    ///
    /// - Ensures the day directory (`{root}/YYYY/MM/DD/`) exists.
    /// - Writes to a temporary file next to the target and renames it into place.
    ///
    /// An entry published in the same second as an existing one replaces it.
    pub fn save(&self, entry: &Entry) -> Result<PathBuf> {
        let path = self.entry_path(entry);
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.base_dir.clone());
        create_dirs(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let json = serde_json::to_vec_pretty(entry).map_err(StoreError::Serialize)?;

        let mut file = tempfile::Builder::new()
            .prefix(".entry-")
            .suffix(".tmp")
            .tempfile_in(&dir)
            .map_err(|e| StoreError::io(&dir, e))?;
        file.write_all(&json)
            .and_then(|_| file.as_file().sync_all())
            .map_err(|e| StoreError::io(file.path(), e))?;
        set_file_mode(file.path()).map_err(|e| StoreError::io(file.path(), e))?;
        file.persist(&path)
            .map_err(|e| StoreError::io(&path, e.error))?;

        debug!(path = %path.display(), "saved entry");
        Ok(path)
    }

    /// Reads and decodes the entry stored at `path`.
    pub fn load(&self, path: &Path) -> Result<Entry> {
        let bytes = fs::read(path).map_err(|e| StoreError::io(path, e))?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Finds the entry with the latest publish time by scanning the whole tree.
    ///
    /// Files that cannot be read or decoded are skipped. Returns the entry
    /// together with the path it was loaded from.
    pub fn find_most_recent(&self) -> Result<(Entry, PathBuf)> {
        match fs::metadata(&self.base_dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(StoreError::StoreMissing(self.base_dir.clone())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::StoreMissing(self.base_dir.clone()));
            }
            Err(source) => {
                return Err(StoreError::Scan {
                    path: self.base_dir.clone(),
                    source,
                });
            }
        }

        let files = scan_dir_for_json_files(&self.base_dir)?;
        let candidates = files.len();

        let newest = files
            .into_iter()
            .filter_map(|path| match self.load(&path) {
                Ok(entry) => Some((entry, path)),
                Err(error) => {
                    debug!("skipping {}: {error}", path.display());
                    None
                }
            })
            .max_by_key(|(entry, _)| entry.publish_time);

        debug!(candidates, found = newest.is_some(), "scanned journal directory");
        newest.ok_or(StoreError::NoEntries)
    }
}

fn create_dirs(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir)
}

#[cfg(unix)]
fn set_file_mode(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_file_mode(_path: &Path) -> io::Result<()> {
    Ok(())
}
