use anyhow::Result;
use serde::Deserialize;
use std::env;
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub imagekit: ImageKitConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// ImageKit account credentials.
///
/// `private_key` is the shared secret the provider uses to re-derive grant
/// signatures. It must never appear in responses or logs; `Debug` is
/// hand-written to redact it.
#[derive(Clone, Deserialize)]
pub struct ImageKitConfig {
    pub private_key: String,
    pub public_key: String,
    pub url_endpoint: String,
}

impl std::fmt::Debug for ImageKitConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageKitConfig")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("url_endpoint", &self.url_endpoint)
            .finish()
    }
}

impl ImageKitConfig {
    /// Log a startup summary of the ImageKit account without exposing the
    /// private key.
    pub fn log_summary(&self) {
        if self.private_key.is_empty() || self.public_key.is_empty() {
            warn!("ImageKit credentials missing; upload authorization will fail closed");
        } else {
            info!(
                "ImageKit configured: endpoint={}, public_key={}",
                self.url_endpoint,
                masked(&self.public_key)
            );
        }
    }
}

/// Truncate an identifier for log output.
fn masked(key: &str) -> String {
    format!("{}...", key.chars().take(12).collect::<String>())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            // Missing credentials load as empty strings so the server still
            // boots and the auth endpoint fails closed per call instead of
            // crashing mid-response.
            imagekit: ImageKitConfig {
                private_key: env::var("IMAGEKIT_PRIVATE_KEY").unwrap_or_default(),
                public_key: env::var("IMAGEKIT_PUBLIC_KEY").unwrap_or_default(),
                url_endpoint: env::var("IMAGEKIT_URL_ENDPOINT").unwrap_or_default(),
            },
        })
    }
}
