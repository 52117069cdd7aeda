//! Chat panel data.
//!
//! The chat panel has no transport yet. It displays a list of
//! [`ChatMessage`] records handed to it at render time; the default list is
//! [`default_messages`].

mod message;

pub use message::{ChatMessage, ChatRole, default_messages};
