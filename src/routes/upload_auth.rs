//! Upload-authorization endpoint
//!
//! Thin HTTP adapter over `imagekit::grant::issue_grant`. The browser upload
//! helper calls this (GET or POST, no parameters) and forwards the returned
//! fields to ImageKit's upload API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use crate::imagekit::issue_grant;
use crate::models::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/imagekit-auth", get(imagekit_auth))
        .route("/api/imagekit-auth", post(imagekit_auth))
        .with_state(state)
}

async fn imagekit_auth(State(state): State<AppState>) -> Response {
    match issue_grant(&state.config.imagekit) {
        Ok(grant) => (
            StatusCode::OK,
            // Grants are single-use credentials; intermediaries must never
            // cache or replay them
            [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
            Json(grant),
        )
            .into_response(),
        Err(e) => {
            // Full detail stays server-side; the caller only learns that
            // authorization failed
            error!("Upload authorization failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Authentication failed" })),
            )
                .into_response()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ImageKitConfig, ServerConfig};
    use crate::imagekit::{sign_grant, UploadGrant};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_state(private_key: &str) -> AppState {
        AppState {
            config: Config {
                server: ServerConfig {
                    port: 3000,
                    host: "127.0.0.1".to_string(),
                },
                imagekit: ImageKitConfig {
                    private_key: private_key.to_string(),
                    public_key: if private_key.is_empty() {
                        String::new()
                    } else {
                        "public_test_key".to_string()
                    },
                    url_endpoint: "https://ik.imagekit.io/demo".to_string(),
                },
            },
        }
    }

    async fn issue(router: Router) -> (StatusCode, Option<String>, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/imagekit-auth")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let cache_control = response
            .headers()
            .get(header::CACHE_CONTROL)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();

        (status, cache_control, body)
    }

    #[tokio::test]
    async fn test_grant_response_shape() {
        let state = test_state("private_test_key");
        let before = chrono::Utc::now().timestamp();
        let (status, cache_control, body) = issue(router(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            cache_control.as_deref(),
            Some("no-store, no-cache, must-revalidate")
        );

        let grant: UploadGrant = serde_json::from_value(body).unwrap();
        assert_eq!(grant.token.len(), 36);
        assert!(grant.expire > before);
        assert_eq!(grant.signature.len(), 40);
        assert_eq!(grant.public_key, "public_test_key");

        // The provider will re-derive the signature from these exact fields
        let expected = sign_grant(&grant.token, grant.expire, "private_test_key").unwrap();
        assert_eq!(grant.signature, expected);
    }

    #[tokio::test]
    async fn test_post_is_accepted_too() {
        let state = test_state("private_test_key");
        let response = router(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/imagekit-auth")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_two_calls_yield_distinct_grants() {
        let state = test_state("private_test_key");

        let (status_a, _, body_a) = issue(router(state.clone())).await;
        let (status_b, _, body_b) = issue(router(state)).await;

        assert_eq!(status_a, StatusCode::OK);
        assert_eq!(status_b, StatusCode::OK);

        let a: UploadGrant = serde_json::from_value(body_a).unwrap();
        let b: UploadGrant = serde_json::from_value(body_b).unwrap();

        assert_ne!(a.token, b.token);
        assert_ne!(a.signature, b.signature);
        // Issued within the same second, or at worst one apart
        assert!((a.expire - b.expire).abs() <= 1);
    }

    #[tokio::test]
    async fn test_missing_key_returns_generic_failure() {
        let state = test_state("");
        let (status, _, body) = issue(router(state)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Authentication failed" }));
    }
}
