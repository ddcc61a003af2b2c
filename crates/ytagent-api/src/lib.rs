//! Axum HTTP server for the upload agent.
//!
//! This crate provides:
//! - The upload form page and its multipart submission endpoint
//! - A JSON endpoint for SEO content generation
//! - Rate limiting and security headers
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod security;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
