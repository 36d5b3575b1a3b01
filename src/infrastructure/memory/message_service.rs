//! In-Memory Message Service Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{MessageServicePort, ServiceError};
use crate::domain::Message;

/// 存储条目
///
/// seq 单调递增，作为同一时间戳下 list 排序的决胜键
#[derive(Debug, Clone)]
struct StoredMessage {
    message: Message,
    created_at: DateTime<Utc>,
    seq: u64,
}

/// 内存消息服务
pub struct InMemoryMessageService {
    messages: DashMap<Uuid, StoredMessage>,
    next_seq: AtomicU64,
}

impl InMemoryMessageService {
    pub fn new() -> Self {
        Self {
            messages: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryMessageService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageServicePort for InMemoryMessageService {
    async fn register(&self, message: Message) -> Result<Message, ServiceError> {
        let id = message.id;
        let created_at = Utc::now();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.messages.insert(
            id,
            StoredMessage {
                message: message.clone(),
                created_at,
                seq,
            },
        );
        tracing::info!(message_id = %id, username = %message.username, created_at = %created_at, "Message registered");
        Ok(message)
    }

    async fn get(&self, id: Uuid) -> Result<Message, ServiceError> {
        self.messages
            .get(&id)
            .map(|entry| entry.message.clone())
            .ok_or(ServiceError::NotFound(id))
    }

    async fn update(&self, id: Uuid, message: Message) -> Result<Message, ServiceError> {
        let mut entry = self.messages.get_mut(&id).ok_or(ServiceError::NotFound(id))?;
        entry.message = message.clone();
        tracing::info!(message_id = %id, "Message updated");
        Ok(message)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.messages
            .remove(&id)
            .map(|_| {
                tracing::info!(message_id = %id, "Message deleted");
            })
            .ok_or(ServiceError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Message>, ServiceError> {
        let mut entries: Vec<StoredMessage> =
            self.messages.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|e| (e.created_at, e.seq));
        Ok(entries.into_iter().map(|e| e.message).collect())
    }
}
