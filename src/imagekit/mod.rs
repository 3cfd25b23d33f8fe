// ImageKit integration: grant issuance (the core contract), the
// direct-upload client, and the CDN URL builder

pub mod grant;
pub mod upload;
pub mod url;

pub use grant::{issue_grant, sign_grant, GrantError, UploadGrant, GRANT_VALIDITY_SECS};
pub use upload::{UploadClient, UploadError, UploadedFile};
pub use url::{image_url, Transformation};
