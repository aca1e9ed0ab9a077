//! sawit-client library
//!
//! The HTTP session client shared by every MySawit screen, the session store
//! it reads the bearer token from, the typed data model, and one thin service
//! wrapper per backing microservice.

pub mod models;
pub mod services;
pub mod session;

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientResult, REQUEST_FAILED};
pub use session::{
    FileSessionStore, MemorySessionStore, NullSessionStore, SessionError, SessionKey,
    SessionResult, SessionStore, UserInfo,
};
