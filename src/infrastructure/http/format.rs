//! Request Payload Format
//!
//! 在边界处一次性识别请求体格式，非 JSON 一律以 415 拒绝，
//! 拒绝发生在任何服务调用之前

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// 请求体格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    Xml,
    Unknown,
}

impl PayloadFormat {
    /// 从 Content-Type 头识别格式
    ///
    /// 忽略参数部分（如 `; charset=utf-8`），兼容 `+json` / `+xml` 后缀
    pub fn classify(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return PayloadFormat::Unknown;
        };
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/json" => PayloadFormat::Json,
            "application/xml" | "text/xml" => PayloadFormat::Xml,
            _ if essence.ends_with("+json") => PayloadFormat::Json,
            _ if essence.ends_with("+xml") => PayloadFormat::Xml,
            _ => PayloadFormat::Unknown,
        }
    }

    /// 是否接受该格式的请求体
    pub fn is_acceptable(self) -> bool {
        matches!(self, PayloadFormat::Json)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PayloadFormat::Json => "json",
            PayloadFormat::Xml => "xml",
            PayloadFormat::Unknown => "unknown",
        }
    }
}

/// JSON 请求体提取器
///
/// 先识别格式再反序列化：
/// - 非 JSON Content-Type → 415
/// - JSON 反序列化失败 → 400
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        let format = PayloadFormat::classify(content_type);

        if !format.is_acceptable() {
            tracing::debug!(format = format.as_str(), "Rejecting non-JSON request body");
            return Err(ApiError::UnsupportedMediaType(format!(
                "unsupported request format '{}', application/json required",
                format.as_str()
            )));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read request body: {}", e)))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;

        Ok(JsonPayload(value))
    }
}
