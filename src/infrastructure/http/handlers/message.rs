//! Message HTTP Handlers
//!
//! 将 HTTP 请求翻译为 MessageService 端口调用，并把结果/错误映射回响应：
//! - 非 JSON 请求体在提取器中被拒绝（415），服务不会被调用
//! - 路径 id 与请求体 id 不一致的更新在委派前被拒绝（400）

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::ServiceError;
use crate::domain::Message;
use crate::infrastructure::http::dto::RegisterMessageRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::format::JsonPayload;
use crate::infrastructure::http::state::AppState;

/// 登记新消息
///
/// `POST /messages` → 201 + 创建的消息（id 由服务端生成）
pub async fn register_message(
    State(state): State<Arc<AppState>>,
    JsonPayload(req): JsonPayload<RegisterMessageRequest>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let message = Message::new(req.username, req.content)?;
    let created = state.message_service.register(message).await?;

    tracing::info!(
        message_id = %created.id,
        username = %created.username,
        "Message registered"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// 获取消息
///
/// `GET /messages/{id}` → 200 + 消息
pub async fn get_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Message>, ApiError> {
    let message = state
        .message_service
        .get(id)
        .await
        .map_err(|e| match e {
            // 既有客户端依赖 400 而非 404，保持该映射不变
            ServiceError::NotFound(id) => {
                ApiError::BadRequest(format!("Message not found: {}", id))
            }
            other => other.into(),
        })?;

    Ok(Json(message))
}

/// 更新消息
///
/// `PUT /messages/{id}` → 200 + 更新后的消息
/// 路径 id 与请求体 id 不一致 → 400；id 不存在 → 404
pub async fn update_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    JsonPayload(message): JsonPayload<Message>,
) -> Result<Json<Message>, ApiError> {
    if message.id != id {
        return Err(ApiError::BadRequest(format!(
            "Path id {} does not match body id {}",
            id, message.id
        )));
    }
    message.validate()?;

    let updated = state.message_service.update(id, message).await?;

    tracing::info!(message_id = %id, "Message updated");

    Ok(Json(updated))
}

/// 删除消息
///
/// `DELETE /messages/{id}` → 204；id 不存在 → 404
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.message_service.delete(id).await?;

    tracing::info!(message_id = %id, "Message deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// 列出所有消息（创建顺序）
///
/// `GET /messages` → 200 + 消息数组
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = state.message_service.list().await?;
    Ok(Json(messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MessageServicePort;
    use crate::infrastructure::http::routes::create_routes;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::util::ServiceExt;

    /// 计数 fake：预置消息列表 + 每个操作的显式调用计数器
    #[derive(Default)]
    struct CountingMessageService {
        seeded: Vec<Message>,
        register_calls: AtomicUsize,
        get_calls: AtomicUsize,
        update_calls: AtomicUsize,
        delete_calls: AtomicUsize,
        list_calls: AtomicUsize,
    }

    impl CountingMessageService {
        fn empty() -> Arc<Self> {
            Arc::new(Self::default())
        }

        fn seeded(messages: Vec<Message>) -> Arc<Self> {
            Arc::new(Self {
                seeded: messages,
                ..Self::default()
            })
        }

        fn knows(&self, id: Uuid) -> bool {
            self.seeded.iter().any(|m| m.id == id)
        }
    }

    #[async_trait]
    impl MessageServicePort for CountingMessageService {
        async fn register(&self, message: Message) -> Result<Message, ServiceError> {
            self.register_calls.fetch_add(1, Ordering::SeqCst);
            Ok(message)
        }

        async fn get(&self, id: Uuid) -> Result<Message, ServiceError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.seeded
                .iter()
                .find(|m| m.id == id)
                .cloned()
                .ok_or(ServiceError::NotFound(id))
        }

        async fn update(&self, id: Uuid, message: Message) -> Result<Message, ServiceError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            if self.knows(id) {
                Ok(message)
            } else {
                Err(ServiceError::NotFound(id))
            }
        }

        async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            if self.knows(id) {
                Ok(())
            } else {
                Err(ServiceError::NotFound(id))
            }
        }

        async fn list(&self) -> Result<Vec<Message>, ServiceError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.seeded.clone())
        }
    }

    fn test_app(service: Arc<CountingMessageService>) -> Router {
        let state = AppState::new(service);
        create_routes().with_state(Arc::new(state))
    }

    fn message(username: &str, content: &str) -> Message {
        Message::new(username, content).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    const XML_PAYLOAD: &str =
        "<message><username>Name</username><content>Hello!</content></message>";

    // ========== Register ==========

    #[tokio::test]
    async fn test_register_returns_201_and_calls_service_once() {
        let service = CountingMessageService::empty();
        let app = test_app(service.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/messages")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"username":"Name","content":"Hello!"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["username"], "Name");
        assert_eq!(json["content"], "Hello!");
        // 服务端生成的 id 必须是合法 UUID
        json["id"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("response must carry a generated uuid");

        assert_eq!(service.register_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_register_xml_returns_415_without_service_call() {
        let service = CountingMessageService::empty();
        let app = test_app(service.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/messages")
            .header(CONTENT_TYPE, "application/xml")
            .body(Body::from(XML_PAYLOAD))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(service.register_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_register_without_content_type_returns_415() {
        let service = CountingMessageService::empty();
        let app = test_app(service.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/messages")
            .body(Body::from(r#"{"username":"Name","content":"Hello!"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(service.register_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_register_blank_username_returns_400() {
        let service = CountingMessageService::empty();
        let app = test_app(service.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/messages")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"username":"  ","content":"Hello!"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(service.register_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_register_malformed_json_returns_400() {
        let service = CountingMessageService::empty();
        let app = test_app(service.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/messages")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(service.register_calls.load(Ordering::SeqCst), 0);
    }

    // ========== Get ==========

    #[tokio::test]
    async fn test_get_returns_200_with_message() {
        let existing = message("Name", "Hello!");
        let service = CountingMessageService::seeded(vec![existing.clone()]);
        let app = test_app(service.clone());

        let request = Request::builder()
            .uri(format!("/messages/{}", existing.id))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::to_value(&existing).unwrap());
        assert_eq!(service.get_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_400() {
        // 既有契约：未找到映射为 400 而非 404
        let service = CountingMessageService::empty();
        let app = test_app(service.clone());

        let request = Request::builder()
            .uri(format!("/messages/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(service.get_calls.load(Ordering::SeqCst), 1);
    }

    // ========== Update ==========

    #[tokio::test]
    async fn test_update_returns_200_and_calls_service_once() {
        let existing = message("Name", "Hello!");
        let service = CountingMessageService::seeded(vec![existing.clone()]);
        let app = test_app(service.clone());

        let mut updated = existing.clone();
        updated.content = "Hello again!".to_string();

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/messages/{}", existing.id))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&updated).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["content"], "Hello again!");
        assert_eq!(service.update_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_update_xml_returns_415_without_service_call() {
        let service = CountingMessageService::empty();
        let app = test_app(service.clone());

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/messages/{}", Uuid::new_v4()))
            .header(CONTENT_TYPE, "application/xml")
            .body(Body::from(XML_PAYLOAD))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(service.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_update_id_mismatch_returns_400_without_service_call() {
        let existing = message("Name", "Hello!");
        let service = CountingMessageService::seeded(vec![existing.clone()]);
        let app = test_app(service.clone());

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/messages/{}", Uuid::new_v4()))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&existing).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(service.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_404() {
        let service = CountingMessageService::empty();
        let app = test_app(service.clone());

        let unknown = message("Name", "Hello!");

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/messages/{}", unknown.id))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&unknown).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(service.update_calls.load(Ordering::SeqCst), 1);
    }

    // ========== Delete ==========

    #[tokio::test]
    async fn test_delete_returns_204_with_empty_body() {
        let existing = message("Name", "Hello!");
        let service = CountingMessageService::seeded(vec![existing.clone()]);
        let app = test_app(service.clone());

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/messages/{}", existing.id))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
        assert_eq!(service.delete_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_404() {
        let service = CountingMessageService::empty();
        let app = test_app(service.clone());

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/messages/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(service.delete_calls.load(Ordering::SeqCst), 1);
    }

    // ========== List ==========

    #[tokio::test]
    async fn test_list_returns_200_with_messages_in_order() {
        let first = message("alice", "one");
        let second = message("bob", "two");
        let service = CountingMessageService::seeded(vec![first.clone(), second.clone()]);
        let app = test_app(service.clone());

        let request = Request::builder()
            .uri("/messages")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::to_value(vec![first, second]).unwrap()
        );
        assert_eq!(service.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_list_empty_returns_empty_array() {
        let service = CountingMessageService::empty();
        let app = test_app(service.clone());

        let request = Request::builder()
            .uri("/messages")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }
}
