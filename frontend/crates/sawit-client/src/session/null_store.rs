use crate::{SessionKey, SessionResult, SessionStore};

/// Store for contexts with no persistent storage at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSessionStore;

impl SessionStore for NullSessionStore {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: SessionKey) -> Option<String> {
        None
    }

    fn set(&self, _key: SessionKey, _value: &str) -> SessionResult<()> {
        Ok(())
    }

    fn remove(&self, _key: SessionKey) -> SessionResult<()> {
        Ok(())
    }
}
