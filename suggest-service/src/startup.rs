//! Application startup and lifecycle management.

use crate::config::{self, SuggestConfig};
use crate::handlers;
use crate::services::providers::CompletionProvider;
use crate::services::providers::together::TogetherCompletionProvider;
use axum::{
    Router,
    routing::{get, post},
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
///
/// Built once at startup and read-only afterwards; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub config: SuggestConfig,
    pub provider: Arc<dyn CompletionProvider>,
}

/// Build the HTTP router for the given state.
///
/// Cross-origin requests are permitted from any origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/test", get(handlers::api_test))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: SuggestConfig) -> Result<Self, AppError> {
        tracing::info!(
            base_url = %config.upstream.base_url,
            "Using completion API base URL"
        );
        tracing::info!(
            key_prefix = %config::key_preview(&config.upstream.api_key),
            "Loaded API credential"
        );

        let provider: Arc<dyn CompletionProvider> =
            Arc::new(TogetherCompletionProvider::new(config.upstream.clone()));
        tracing::info!(
            model = %config.upstream.model,
            "Initialized completion provider"
        );

        let state = AppState { config, provider };

        let app = build_router(state.clone());

        // Port 0 binds a random port, for tests.
        let host = state.config.common.host.clone();
        let listener = TcpListener::bind((host.as_str(), state.config.common.port))
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to bind TCP listener to {}:{}: {}",
                    host,
                    state.config.common.port,
                    e
                );
                AppError::from(e)
            })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
