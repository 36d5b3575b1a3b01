//! HTTP Handlers

pub mod message;
pub mod ping;

pub use message::{delete_message, get_message, list_messages, register_message, update_message};
pub use ping::ping;
