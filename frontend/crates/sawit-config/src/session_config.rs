use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_ENABLED, DEFAULT_SESSION_FILENAME};

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

/// Where the session record (token, user id, username, role) is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// When false the client runs without persistent storage: nothing is
    /// saved and every session read comes back empty.
    pub enabled: bool,
    /// Session file, relative to the config directory
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_SESSION_ENABLED,
            file: String::from(DEFAULT_SESSION_FILENAME),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::session("session.file cannot be empty"));
        }

        let path = Path::new(&self.file);
        if path.is_absolute() || path.components().any(|c| c == Component::ParentDir) {
            return Err(ConfigError::session(
                "session.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the session file under `config_dir`.
    pub fn path_in(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.file)
    }
}
