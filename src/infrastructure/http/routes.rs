//! HTTP Routes
//!
//! API Endpoints:
//! - /messages           POST    登记消息（仅 application/json）
//! - /messages           GET     按创建顺序列出所有消息
//! - /messages/{id}      GET     获取消息
//! - /messages/{id}      PUT     更新消息（仅 application/json）
//! - /messages/{id}      DELETE  删除消息
//! - /ping               GET     健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(message_routes())
}

/// Message 路由
fn message_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/messages",
            post(handlers::register_message).get(handlers::list_messages),
        )
        .route(
            "/messages/:id",
            get(handlers::get_message)
                .put(handlers::update_message)
                .delete(handlers::delete_message),
        )
}
