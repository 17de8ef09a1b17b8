/*
[INPUT]:  Key-value pairs and a storage directory
[OUTPUT]: Persistent string values under fixed keys
[POS]:    Session layer - persistence collaborator for the session token
[UPDATE]: When key storage format or file naming conventions change
*/

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

/// Narrow key-value persistence used only for the session token.
///
/// The interface is infallible: implementations log storage failures and
/// carry on, the same way browser storage never surfaces write errors to
/// the page.
pub trait KvStore: Send + Sync + fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// File-per-key store under a dedicated directory
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Get the expected file path for a key
    pub fn key_file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.credential"))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        let content = fs::read_to_string(self.key_file_path(key)).ok()?;
        let value = content.trim_end_matches('\n');
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.write_value(key, value) {
            warn!(key, error = %err, "failed to persist value");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.key_file_path(key);
        if let Err(err) = fs::remove_file(&path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(key, error = %err, "failed to remove persisted value");
            }
        }
    }
}

impl FileKvStore {
    fn write_value(&self, key: &str, value: &str) -> std::io::Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.key_file_path(key);
        fs::write(&path, value)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}
