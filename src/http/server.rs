//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit,
//!   request log, id validation)
//! - Own the project store and hand it to handlers through `State`
//! - Serve until shutdown

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::{create_project, delete_project, list_projects, update_project};
use crate::http::middleware::{request_log_middleware, validate_id_middleware, Stage};
use crate::lifecycle::signals::shutdown_signal;
use crate::projects::SharedStore;

/// Application state injected into handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: SharedStore,
}

/// HTTP server for the projects API.
pub struct HttpServer {
    router: Router,
    store: SharedStore,
}

impl HttpServer {
    /// Create a server with an empty store.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, SharedStore::default())
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServiceConfig, store: SharedStore) -> Self {
        let state = AppState {
            store: store.clone(),
        };
        let router = Self::build_router(&config, state);
        tracing::debug!(
            stages = ?Stage::all().map(|stage| stage.name()),
            "Middleware pipeline built"
        );
        Self { router, store }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let id_routes = Router::new()
            .route("/projects/{id}", put(update_project).delete(delete_project))
            .route_layer(middleware::from_fn(validate_id_middleware));

        Router::new()
            .route("/projects", get(list_projects).post(create_project))
            .merge(id_routes)
            .with_state(state)
            .layer(
                // Outermost first. The request log wraps everything so that
                // requests ended by the body limit or timeout are still timed.
                ServiceBuilder::new()
                    .layer(middleware::from_fn(request_log_middleware))
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
                    .layer(DefaultBodyLimit::disable()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Projects API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Handle to the store this server mutates.
    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }
}
