//! HTTP Layer - RESTful API

pub mod dto;
pub mod error;
pub mod format;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use format::{JsonPayload, PayloadFormat};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
