use crate::SessionResult;

use std::fmt;

/// The four persisted session keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SessionKey {
    AuthToken,
    UserId,
    Username,
    UserRole,
}

impl SessionKey {
    pub const ALL: [SessionKey; 4] = [
        SessionKey::AuthToken,
        SessionKey::UserId,
        SessionKey::Username,
        SessionKey::UserRole,
    ];

    /// Name of the key in the backing storage
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::AuthToken => "authToken",
            SessionKey::UserId => "userId",
            SessionKey::Username => "username",
            SessionKey::UserRole => "userRole",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value storage behind the client's session.
///
/// Implementations without a storage medium report `is_available() == false`;
/// the client then treats reads as empty and skips writes.
pub trait SessionStore: Send + Sync {
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, key: SessionKey) -> Option<String>;

    fn set(&self, key: SessionKey, value: &str) -> SessionResult<()>;

    fn remove(&self, key: SessionKey) -> SessionResult<()>;

    /// Write several keys. Stores that can persist them in one step override this.
    fn set_all(&self, entries: &[(SessionKey, &str)]) -> SessionResult<()> {
        for (key, value) in entries {
            self.set(*key, value)?;
        }
        Ok(())
    }

    /// Remove every session key
    fn clear(&self) -> SessionResult<()> {
        for key in SessionKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}
