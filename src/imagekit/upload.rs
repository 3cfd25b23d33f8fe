//! Direct-upload client for ImageKit
//!
//! Server-side counterpart of the browser upload helper: fetch a grant from
//! the authorization endpoint, then POST the file to ImageKit's upload API
//! with the grant fields attached. Used by admin tooling and tests; the
//! client never constructs its own signature.

use reqwest::multipart;
use serde::Deserialize;
use thiserror::Error;

use super::grant::UploadGrant;

/// ImageKit's direct-upload endpoint
const IMAGEKIT_UPLOAD_URL: &str = "https://upload.imagekit.io/api/v1/files/upload";

/// Upload client errors
///
/// There are no internal retries: a retry is a fresh request for a fresh
/// grant, and that decision belongs to the caller.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Authorization request failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upload rejected by provider ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// The provider's record of a stored file
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    pub url: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "fileId")]
    pub file_id: Option<String>,
    pub name: Option<String>,
}

/// Client for authorized direct uploads
pub struct UploadClient {
    client: reqwest::Client,
    auth_url: String,
    upload_url: String,
}

impl UploadClient {
    /// Create a client that fetches grants from `auth_url`
    /// (the service's `/api/imagekit-auth` endpoint).
    pub fn new(auth_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            auth_url: auth_url.into(),
            upload_url: IMAGEKIT_UPLOAD_URL.to_string(),
        }
    }

    /// Override the provider upload URL. Used by tests to point at a mock
    /// provider.
    pub fn with_upload_url(mut self, upload_url: impl Into<String>) -> Self {
        self.upload_url = upload_url.into();
        self
    }

    /// Fetch a fresh upload grant from the authorization endpoint.
    ///
    /// Any non-success response is fatal to this upload attempt.
    pub async fn fetch_grant(&self) -> Result<UploadGrant, UploadError> {
        let response = self
            .client
            .get(&self.auth_url)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Auth(format!("{}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))
    }

    /// Upload a file to ImageKit under `folder`.
    ///
    /// Fetches a grant, then POSTs multipart form data with the four grant
    /// fields alongside the file payload. The catalog convention is the
    /// `/wallpapers` folder. The provider re-validates signature and expiry
    /// before accepting; rejections surface status and message.
    pub async fn upload(
        &self,
        data: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> Result<UploadedFile, UploadError> {
        let grant = self.fetch_grant().await?;

        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(mime.as_ref())
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        let form = multipart::Form::new()
            .part("file", part)
            .text("fileName", file_name.to_string())
            .text("useUniqueFileName", "true")
            .text("folder", folder.to_string())
            .text("token", grant.token)
            .text("expire", grant.expire.to_string())
            .text("signature", grant.signature)
            .text("publicKey", grant.public_key);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
