//! # HTTP Server
//!
//! Axum-based server for the trivia API: route table, CORS, and the
//! JSON 404/405 fallbacks.

use std::net::SocketAddr;

use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::{Logger, Severity};

use super::config::HttpServerConfig;
use super::errors::ApiError;
use super::handlers::{
    delete_question, health, insert_question, list_categories, list_questions,
    next_quiz_question, questions_by_category, search_questions, SharedState,
};

/// HTTP server for the trivia API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(state: SharedState) -> Self {
        Self::with_config(HttpServerConfig::default(), state)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, state: SharedState) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the router with all endpoints
    fn build_router(config: &HttpServerConfig, state: SharedState) -> Router {
        // Permissive CORS unless origins are configured
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        // Wrong verbs on known routes fall through to the 405 handler
        Router::new()
            .route("/health", get(health).fallback(method_not_allowed))
            .route(
                "/categories",
                get(list_categories).fallback(method_not_allowed),
            )
            .route(
                "/questions",
                get(list_questions)
                    .post(insert_question)
                    .fallback(method_not_allowed),
            )
            .route(
                "/questions/search",
                post(search_questions).fallback(method_not_allowed),
            )
            .route(
                "/questions/{id}",
                delete(delete_question).fallback(method_not_allowed),
            )
            .route(
                "/categories/{id}/questions",
                get(questions_by_category).fallback(method_not_allowed),
            )
            .route(
                "/quizzes",
                post(next_quiz_question).fallback(method_not_allowed),
            )
            .fallback(not_found)
            .layer(cors)
            .with_state(state)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");

        Logger::log(
            Severity::Info,
            "server_start",
            &[("addr", &addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Unknown route
async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Known route, wrong verb
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
