//! Upload-authorization grants
//!
//! The one security contract this service owns: issue short-lived signed
//! credentials a browser client hands to ImageKit to authorize a single
//! direct upload. The provider holds the same private key and re-derives
//! the signature before accepting the file; this service never validates
//! grants itself.
//!
//! # Security Notes
//! - The private key never appears in a grant, a log line, or an error
//! - Each grant carries a fresh random token; nothing is shared or stored
//!   between calls
//! - The digest is HMAC-SHA1 because that is what ImageKit's upload API
//!   verifies against, not a choice this service is free to make

use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use thiserror::Error;
use uuid::Uuid;

use crate::config::ImageKitConfig;

/// HMAC type alias for SHA-1
type HmacSha1 = Hmac<Sha1>;

/// How long a grant stays valid after issuance (30 minutes)
pub const GRANT_VALIDITY_SECS: i64 = 1800;

/// Grant issuance errors
///
/// Both variants surface across the HTTP boundary as the same generic
/// failure; the detail here is for server-side logs only.
#[derive(Error, Debug)]
pub enum GrantError {
    #[error("ImageKit credentials are not configured")]
    Configuration,

    #[error("Grant signing failed: {0}")]
    Internal(String),
}

/// A one-time upload credential.
///
/// Field names on the wire are exactly what ImageKit's upload call expects:
/// `token`, `expire`, `signature`, `publicKey`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadGrant {
    /// Random v4 UUID, unique per grant
    pub token: String,
    /// Unix timestamp (seconds) after which the provider rejects the grant
    pub expire: i64,
    /// Lowercase-hex HMAC-SHA1 over `token || decimal(expire)`
    pub signature: String,
    /// Non-secret account identifier, safe to hand to the client
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

/// Issue a fresh upload grant.
///
/// Fails closed with `GrantError::Configuration` when either credential is
/// missing, so a misconfigured deployment produces a clean 500 instead of
/// signing with an empty key.
pub fn issue_grant(config: &ImageKitConfig) -> Result<UploadGrant, GrantError> {
    issue_grant_at(config, Utc::now().timestamp())
}

/// Issue a grant with an explicit clock reading. Split out so the expiry
/// window is testable without racing the wall clock.
fn issue_grant_at(config: &ImageKitConfig, now: i64) -> Result<UploadGrant, GrantError> {
    if config.private_key.is_empty() || config.public_key.is_empty() {
        return Err(GrantError::Configuration);
    }

    let token = Uuid::new_v4().to_string();
    let expire = now + GRANT_VALIDITY_SECS;
    let signature = sign_grant(&token, expire, &config.private_key)?;

    Ok(UploadGrant {
        token,
        expire,
        signature,
        public_key: config.public_key.clone(),
    })
}

/// Compute the grant signature: HMAC-SHA1 keyed with the private key over
/// the token immediately followed by the decimal expiry, no separator.
pub fn sign_grant(token: &str, expire: i64, private_key: &str) -> Result<String, GrantError> {
    hmac_sha1_hex(private_key.as_bytes(), format!("{}{}", token, expire).as_bytes())
}

/// Hash a message with HMAC-SHA1, rendered as lowercase hex (40 chars).
fn hmac_sha1_hex(key: &[u8], message: &[u8]) -> Result<String, GrantError> {
    let mut mac =
        HmacSha1::new_from_slice(key).map_err(|e| GrantError::Internal(e.to_string()))?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

// =============================================================================
// Tests
// =============================================================================
