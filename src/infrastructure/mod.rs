//! 基础设施层
//!
//! - HTTP: RESTful API
//! - Memory: MessageService 内存实现

pub mod http;
pub mod memory;
