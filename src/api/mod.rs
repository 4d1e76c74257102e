//! # Trivia HTTP API
//!
//! The HTTP surface of triviad: request handlers, typed request and
//! response bodies, the error taxonomy, and the axum server wiring.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use handlers::{AppState, SharedState};
pub use server::HttpServer;
