//! In-Memory Implementations

pub mod message_service;

pub use message_service::InMemoryMessageService;
