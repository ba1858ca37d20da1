//! HTTP API Layer
//!
//! Read-only admin surface for the order-to-invoice bridge using Axum: health
//! probes and the activity log feed. Invoice synchronization itself is driven
//! by the host platform's order-completed events, not by this API.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(activity_log, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_sync::ActivityLog;

use crate::config::ApiConfig;
use crate::handlers::{activity, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub activity: ActivityLog,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `activity` - Activity log service backed by the durable store
/// * `config` - API configuration
pub fn create_router(activity: ActivityLog, config: ApiConfig) -> Router {
    let state = AppState { activity, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new().route("/activity", get(activity::list_activity));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
