//! Application startup and lifecycle management.

use crate::config::CommissionConfig;
use crate::handlers;
use crate::services::{get_metrics, DocumentStore, MongoStore};
use axum::{
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: CommissionConfig,
    /// Document store capability; `None` when running without persistence.
    pub store: Option<Arc<dyn DocumentStore>>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Build the application, resolving the document store from
    /// configuration.
    ///
    /// A missing `DATABASE_URL` or an unusable connection string is not
    /// fatal: the service starts in a degraded state where persistence is
    /// skipped and diagnostics report the store as unavailable.
    pub async fn build(config: CommissionConfig) -> Result<Self, AppError> {
        let store: Option<Arc<dyn DocumentStore>> = match &config.database.url {
            Some(url) => match MongoStore::connect(url, &config.database.name).await {
                Ok(store) => Some(Arc::new(store)),
                Err(e) => {
                    tracing::warn!("Document store unavailable, continuing without persistence: {}", e);
                    None
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set, continuing without persistence");
                None
            }
        };

        Self::build_with_store(config, store).await
    }

    /// Build the application with an explicit store (or none). Used
    /// directly by tests to inject mocks.
    pub async fn build_with_store(
        config: CommissionConfig,
        store: Option<Arc<dyn DocumentStore>>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };

        // The site is served from a different origin, so CORS stays
        // permissive.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = Router::new()
            .route("/", get(handlers::root))
            .route("/api/health", get(handlers::health_check))
            .route("/test", get(handlers::database_diagnostics))
            .route("/api/contact", post(handlers::submit_contact))
            .route("/api/estimate", post(handlers::estimate))
            .route("/metrics", get(metrics_endpoint))
            .with_state(state.clone())
            .layer(from_fn(metrics_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(from_fn(request_id_middleware))
            .layer(cors);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    /// The port the server is listening on (useful with port 0 in tests).
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
