//! Postbox - 消息 CRUD HTTP 服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Message Context: 消息实体与校验
//!
//! 应用层 (application/):
//! - Ports: MessageService 端口定义
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（格式识别、错误映射、路由、服务器）
//! - Memory: MessageService 内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
