//! Message Context - 消息实体
//!
//! 不变量:
//! - id 由服务端在创建时生成，此后不可变
//! - username 与 content 必填且非空白

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 消息领域错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("username cannot be blank")]
    BlankUsername,

    #[error("content cannot be blank")]
    BlankContent,
}

/// 消息实体
///
/// JSON 形状: `{"id": "<uuid>", "username": "<string>", "content": "<string>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub username: String,
    pub content: String,
}

impl Message {
    /// 创建新消息（服务端生成 id）
    pub fn new(username: impl Into<String>, content: impl Into<String>) -> Result<Self, MessageError> {
        Self::with_id(Uuid::new_v4(), username, content)
    }

    /// 使用既有 id 构造消息（用于更新请求体的反序列化后校验）
    pub fn with_id(
        id: Uuid,
        username: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, MessageError> {
        let message = Self {
            id,
            username: username.into(),
            content: content.into(),
        };
        message.validate()?;
        Ok(message)
    }

    /// 校验必填字段
    pub fn validate(&self) -> Result<(), MessageError> {
        if self.username.trim().is_empty() {
            return Err(MessageError::BlankUsername);
        }
        if self.content.trim().is_empty() {
            return Err(MessageError::BlankContent);
        }
        Ok(())
    }
}
