//! 应用层
//!
//! Ports: 出站端口定义（MessageService）

pub mod ports;

pub use ports::{MessageServicePort, ServiceError};
