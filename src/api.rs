// 🌐 REST API - Axum routes over a loaded RecordStore
//
// The store is built once by the binary and shared read-only; handlers
// never lock or mutate it.

use crate::report::producer_award_intervals;
use crate::store::RecordStore;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::any::Any;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Route of the award-interval query
pub const AWARDS_INTERVAL_PATH: &str = "/api/producers/awards-interval";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Body of every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub works: usize,
    pub producers: usize,
    pub credits: usize,
    pub loaded_at: DateTime<Utc>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check with dataset counts
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        works: state.store.work_count(),
        producers: state.store.individual_count(),
        credits: state.store.credit_count(),
        loaded_at: state.store.loaded_at(),
    })
}

/// GET /api/producers/awards-interval - Min/max intervals between wins
async fn producer_intervals(State(state): State<AppState>) -> Response {
    match producer_award_intervals(&state.store) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!("Error computing award intervals: {}", e);
            error_response(e.to_string())
        }
    }
}

fn error_response(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected failure".to_string()
    };

    error!("Request handler panicked: {}", details);
    error_response(details)
}

// ============================================================================
// Router
// ============================================================================

/// Panics become 500 JSON responses, every request is traced, CORS is open
pub fn with_boundary_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Listen address from a bare IPv4 or IPv6 host and a port
pub fn bind_address(host: &str, port: u16) -> Result<SocketAddr, AddrParseError> {
    let ip: IpAddr = host.trim().parse()?;
    Ok(SocketAddr::new(ip, port))
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/producers/awards-interval", get(producer_intervals))
        .with_state(state);

    with_boundary_layers(Router::new().nest("/api", api_routes))
}
