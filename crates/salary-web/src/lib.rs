//! Form server: renders the prediction page and answers form submissions.

pub mod form;
mod handlers;
pub mod page;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use salary_ai::InferenceAdapter;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared, read-only state for all handlers.
pub struct AppState {
    pub adapter: InferenceAdapter,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the application router.
///
/// - `GET /` - empty form
/// - `POST /predict` - form submission, renders form plus result
/// - `GET /health` - liveness
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::form))
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &ServerConfig, adapter: InferenceAdapter) -> anyhow::Result<()> {
    let classifier = adapter.classifier_kind();
    let app = create_router(Arc::new(AppState { adapter }));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, classifier, "serving prediction form");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr() {
        assert_eq!(ServerConfig::default().bind_addr(), "127.0.0.1:8501");
    }

    #[test]
    fn custom_bind_addr() {
        let config = ServerConfig {
            host: "0.0.0.0".into(),
            port: 9000,
        };
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }
}
