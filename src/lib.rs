// Wallfolio backend - signed upload credentials for a wallpaper catalog

pub mod config;
pub mod imagekit;
pub mod middleware;
pub mod models;
pub mod routes;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
