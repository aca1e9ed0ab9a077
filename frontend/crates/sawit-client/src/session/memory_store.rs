use crate::{SessionKey, SessionResult, SessionStore};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// In-process session store. Nothing outlives the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<SessionKey, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<SessionKey, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.entries().get(&key).cloned()
    }

    fn set(&self, key: SessionKey, value: &str) -> SessionResult<()> {
        self.entries().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> SessionResult<()> {
        self.entries().remove(&key);
        Ok(())
    }
}
