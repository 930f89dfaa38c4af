//! Backoffice Web Server
//!
//! This module provides the admin web interface for Backoffice: entity admin
//! pages with permission-gated create modals, rendered server-side.

pub mod auth;
pub mod handlers;
pub mod i18n;
pub mod modal;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

// Re-export main types
pub use server::BackofficeServer;
pub use state::AppState;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Admin pages
        .nest("/admin", routes::admin_routes())
        // API routes
        .nest("/api", routes::api_routes())
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable development mode
    pub dev_mode: bool,
    /// Role assigned to requests without actor headers
    pub anonymous_role: String,
    /// Requirement policy for create triggers ("all" or "any")
    pub requirement_policy: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dev_mode: false,
            anonymous_role: "viewer".to_string(),
            requirement_policy: "all".to_string(),
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("BACKOFFICE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("BACKOFFICE_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            dev_mode: std::env::var("BACKOFFICE_DEV_MODE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            anonymous_role: std::env::var("BACKOFFICE_ANONYMOUS_ROLE")
                .unwrap_or_else(|_| "viewer".to_string()),
            requirement_policy: std::env::var("BACKOFFICE_REQUIREMENT_POLICY")
                .unwrap_or_else(|_| "all".to_string()),
        }
    }

    /// Build a web configuration from the core configuration file
    pub fn from_core(config: &backoffice_core::BackofficeConfig) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            dev_mode: config.server.dev_mode,
            anonymous_role: config.access.anonymous_role.clone(),
            requirement_policy: config.access.requirement_policy.clone(),
        }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Access error: {0}")]
    Access(#[from] backoffice_access::AccessError),

    #[error("Core error: {0}")]
    Core(#[from] backoffice_core::BackofficeError),
}

pub type WebResult<T> = Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let template = templates::ErrorTemplate::internal(self.to_string());
        match askama::Template::render(&template) {
            Ok(markup) => (StatusCode::INTERNAL_SERVER_ERROR, Html(markup)).into_response(),
            Err(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
                .into_response(),
        }
    }
}
