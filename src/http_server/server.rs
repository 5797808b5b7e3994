//! # HTTP Server
//!
//! Combines the record, health and observability routers behind CORS and
//! request logging.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes, ObservabilityState};
use super::record_routes::{record_routes, RecordsState};
use super::request_log::request_log_middleware;
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::storage::RecordStore;

/// HTTP server for the record API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store
    pub fn new(config: HttpServerConfig, store: Arc<dyn RecordStore>) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let router = build_router(&config, store, metrics);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        let local_addr = listener.local_addr()?.to_string();

        log_event_with_fields(Event::Serving, &[("addr", &local_addr)]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(
    config: &HttpServerConfig,
    store: Arc<dyn RecordStore>,
    metrics: Arc<MetricsRegistry>,
) -> Router {
    let observability_state = Arc::new(ObservabilityState {
        metrics: metrics.clone(),
        backend: store.backend_name(),
    });
    let records_state = Arc::new(RecordsState::new(store, metrics.clone()));

    Router::new()
        .merge(health_routes(observability_state.clone()))
        .nest("/api", record_routes(records_state))
        .nest("/observability", observability_routes(observability_state))
        .layer(middleware::from_fn_with_state(
            metrics,
            request_log_middleware,
        ))
        .layer(cors_layer(config))
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    // Invalid origins are rejected when the config loads; here they deny all
    let allow_origin = match config.allowed_origins() {
        Ok(None) => AllowOrigin::from(Any),
        Ok(Some(origins)) => AllowOrigin::list(origins),
        Err(_) => AllowOrigin::list(Vec::new()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
