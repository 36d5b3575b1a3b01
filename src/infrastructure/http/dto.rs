//! Data Transfer Objects

use serde::Deserialize;

/// 登记消息请求（id 由服务端生成）
#[derive(Debug, Deserialize)]
pub struct RegisterMessageRequest {
    pub username: String,
    pub content: String,
}
