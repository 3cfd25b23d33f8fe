// CORS configuration
//
// The browser upload helper runs on a different origin than this service,
// so the grant endpoint must be callable cross-origin from anywhere. That
// openness is deliberate and documented: issuing a grant is cheap, and any
// rate limiting belongs to the network infrastructure in front of us.

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn apply_cors(router: Router) -> Router {
    router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
