//! File-backed session storage.

use crate::error::SessionError;
use crate::providers::SessionStorage;
use std::path::{Path, PathBuf};

/// Session storage persisted as one file per key under a directory.
///
/// The durable analog of browser storage for desktop embeddings: values
/// survive restarts, and a second process pointed at the same directory
/// reads the same session. Unreadable or missing files read as absent —
/// a deleted or corrupted file must never break startup.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the directory cannot be
    /// created.
    pub fn open(dir: impl Into<PathBuf>) -> crate::error::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| SessionError::Storage(format!("create {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    /// The directory values are stored under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> crate::error::Result<()> {
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .map_err(|e| SessionError::Storage(format!("write {}: {e}", path.display())))
    }

    fn remove(&self, key: &str) -> crate::error::Result<()> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(format!(
                "remove {}: {e}",
                path.display()
            ))),
        }
    }
}
