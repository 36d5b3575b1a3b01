//! 领域层
//!
//! Message Context: 消息实体与校验规则

pub mod message;

pub use message::{Message, MessageError};
