//! Data models for the FreeScout API.
//!
//! The API's payload shapes are not owned by this crate, so nothing here
//! imposes a schema beyond the envelope fields the operations actually read.
//! Everything else passes through as opaque `serde_json::Value`.

mod body;
mod conversation;

pub use body::*;
pub use conversation::*;
