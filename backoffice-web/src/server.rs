//! Backoffice Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use axum::serve;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main Backoffice web server
pub struct BackofficeServer {
    config: WebConfig,
    state: AppState,
}

impl BackofficeServer {
    /// Create a new Backoffice server
    pub fn new(config: WebConfig) -> WebResult<Self> {
        let state = AppState::new(config.clone())?;

        Ok(Self { config, state })
    }

    /// Start the web server
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("Starting Backoffice web server");
        info!("Server address: http://{}", address);
        info!("Development mode: {}", self.config.dev_mode);

        let app = create_app(self.state.clone());

        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("Server listening on http://{}", address);

        if let Err(e) = serve(listener, app).await {
            error!("Server error: {}", e);
            return Err(WebError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for BackofficeServer
pub struct BackofficeServerBuilder {
    config: WebConfig,
}

impl BackofficeServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: WebConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable development mode
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.config.dev_mode = dev_mode;
        self
    }

    /// Build the server
    pub fn build(self) -> WebResult<BackofficeServer> {
        BackofficeServer::new(self.config)
    }
}

impl Default for BackofficeServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
