//! Session record storage.
//!
//! The session is four independent string keys rather than one record. The
//! client always writes and clears them together, but a store may observe
//! partial presence if something else edits the backing medium.

mod error;
mod file_store;
mod memory_store;
mod null_store;
mod store;
mod user_info;

pub use error::{SessionError, SessionResult};
pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;
pub use null_store::NullSessionStore;
pub use store::{SessionKey, SessionStore};
pub use user_info::UserInfo;
