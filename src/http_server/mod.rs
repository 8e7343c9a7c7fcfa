//! # HomeQuest HTTP API Module
//!
//! Axum HTTP surface: listing search, user preferences, and NLP
//! delegation, all wrapped in a common response envelope.

pub mod config;
pub mod errors;
pub mod nlp_routes;
pub mod preference_routes;
pub mod property_routes;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::ApiResponse;
pub use server::{AppState, HttpServer};
