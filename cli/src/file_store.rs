//! Directory-backed log store for terminal participants.
//!
//! Each key maps to `DIR/<key>.json` holding the same JSON array a browser
//! keeps in `localStorage`, so a log exported from devtools can be dropped in
//! as-is. Writes go to a sibling temp file and are renamed into place, so a
//! reader never observes a half-written array.

#[cfg(test)]
#[path = "file_store_test.rs"]
mod file_store_test;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chatlog::{ChangeFeed, ChangeHandler, LogStore, StoreError, Subscription};

#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    ///
    /// # Errors
    ///
    /// Rejects keys that are empty or would escape the store directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StoreError::Backend(format!("invalid key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Delete the value for `key`. Missing values are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the file exists but cannot be removed.
    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(io_error(&err)),
        }
    }
}

impl LogStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|err| io_error(&err))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|err| io_error(&err))?;
        fs::rename(&tmp, &path).map_err(|err| io_error(&err))?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "log written");
        Ok(())
    }
}

/// A CLI invocation is one short-lived context; it never observes writes
/// made by others while it runs.
impl ChangeFeed for FileStore {
    fn on_remote_change(&self, _key: &str, _handler: ChangeHandler) -> Subscription {
        Subscription::detached()
    }
}

fn io_error(err: &std::io::Error) -> StoreError {
    match err.kind() {
        ErrorKind::PermissionDenied => StoreError::Unavailable,
        ErrorKind::StorageFull => StoreError::QuotaExceeded { bytes: 0 },
        _ => StoreError::Backend(err.to_string()),
    }
}
