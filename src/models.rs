use crate::config::Config;

/// Shared state cloned into every handler.
///
/// Holds only read-only configuration; the service has no database or session
/// state, so concurrent requests never contend on anything.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

// API Request/Response types

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}
