use crate::{SessionError, SessionKey, SessionResult, SessionStore};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::warn;

/// Persistent session store backed by a JSON object file.
///
/// Each session key is one string entry of the object, mirroring browser local
/// storage. The file and its parent directory are created on first write.
/// A missing, unreadable, or corrupt file reads as empty.
///
/// Entries this store does not own are kept untouched on rewrite.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> BTreeMap<String, String> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!("failed to read session file {}: {e}", self.path.display());
                return BTreeMap::new();
            }
        };

        if contents.trim().is_empty() {
            return BTreeMap::new();
        }

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(
                "ignoring corrupt session file {}: {e}",
                self.path.display()
            );
            BTreeMap::new()
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> SessionResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| SessionError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let content =
            serde_json::to_string_pretty(entries).map_err(|e| SessionError::Encode {
                path: self.path.clone(),
                source: e,
            })?;

        std::fs::write(&self.path, content).map_err(|e| SessionError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        restrict_permissions(&self.path)
    }

    fn update<F>(&self, apply: F) -> SessionResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.lock.lock().unwrap_or_else(|p| p.into_inner());
        let mut entries = self.read_entries();
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        let _guard = self.lock.lock().unwrap_or_else(|p| p.into_inner());
        self.read_entries().remove(key.as_str())
    }

    fn set(&self, key: SessionKey, value: &str) -> SessionResult<()> {
        self.update(|entries| {
            entries.insert(key.as_str().to_string(), value.to_string());
        })
    }

    fn remove(&self, key: SessionKey) -> SessionResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key.as_str());
        })
    }

    fn set_all(&self, new_entries: &[(SessionKey, &str)]) -> SessionResult<()> {
        self.update(|entries| {
            for (key, value) in new_entries {
                entries.insert(key.as_str().to_string(), value.to_string());
            }
        })
    }

    fn clear(&self) -> SessionResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            for key in SessionKey::ALL {
                entries.remove(key.as_str());
            }
        })
    }
}

/// The session file holds a bearer token: owner read/write only.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> SessionResult<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).map_err(|e| {
        SessionError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> SessionResult<()> {
    Ok(())
}
