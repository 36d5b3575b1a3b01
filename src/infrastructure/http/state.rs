//! Application State

use std::sync::Arc;

use crate::application::ports::MessageServicePort;

/// 应用状态
///
/// HTTP 层只持有 MessageService 端口，实现由装配方注入
pub struct AppState {
    pub message_service: Arc<dyn MessageServicePort>,
}

impl AppState {
    pub fn new(message_service: Arc<dyn MessageServicePort>) -> Self {
        Self { message_service }
    }
}
