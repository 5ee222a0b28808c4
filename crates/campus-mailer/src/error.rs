//! Error types for campus-mailer.

use campus_config::ConfigKey;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, MailError>;

#[derive(Debug, Error)]
pub enum MailError {
    /// The credential for the transport resolved to its placeholder.
    #[error("credential {0} is not configured")]
    CredentialUnconfigured(ConfigKey),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote service answered with a non-retryable failure.
    #[error("mail API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
