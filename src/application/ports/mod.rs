//! Ports - 出站端口
//!
//! 定义 HTTP 层依赖的抽象接口，具体实现在 infrastructure 层

pub mod message_service;

pub use message_service::{MessageServicePort, ServiceError};
