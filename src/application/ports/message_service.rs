//! Message Service Port
//!
//! HTTP 层唯一依赖的业务协作者接口
//! 具体实现在 infrastructure 层（内存实现），测试中注入计数 fake

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::Message;

/// 服务层错误
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Message not found: {0}")]
    NotFound(Uuid),

    #[error("Internal service error: {0}")]
    Internal(String),
}

/// Message Service Port
#[async_trait]
pub trait MessageServicePort: Send + Sync {
    /// 登记新消息（id 已由调用方生成）
    async fn register(&self, message: Message) -> Result<Message, ServiceError>;

    /// 根据 ID 查找消息
    async fn get(&self, id: Uuid) -> Result<Message, ServiceError>;

    /// 更新消息
    async fn update(&self, id: Uuid, message: Message) -> Result<Message, ServiceError>;

    /// 删除消息
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;

    /// 按创建顺序列出所有消息
    async fn list(&self) -> Result<Vec<Message>, ServiceError>;
}
