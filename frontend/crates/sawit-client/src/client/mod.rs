pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, REQUEST_FAILED};
pub use error::{ClientError, Result as ClientResult};
