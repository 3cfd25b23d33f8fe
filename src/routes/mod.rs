//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/imagekit-auth` - upload authorization grants (GET and POST)
//! - `/api/health` - Health checks

pub mod health;
pub mod upload_auth;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors::apply_cors;
use crate::models::AppState;

/// Create the main application router
///
/// CORS is applied router-wide: any origin may call the grant endpoint
/// cross-origin, and preflights are answered for GET/POST.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let api_router = Router::new()
        .merge(upload_auth::router(state))
        .merge(health::router());

    apply_cors(api_router).layer(TraceLayer::new_for_http())
}

// =============================================================================
// Tests
// =============================================================================
