use serde::{Deserialize, Serialize};

/// Identity fields read back from the session store. Each one is read
/// independently, so any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Option<String>,
    pub username: Option<String>,
    pub role: Option<String>,
}

impl UserInfo {
    /// True when none of the fields is stored
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.username.is_none() && self.role.is_none()
    }
}
