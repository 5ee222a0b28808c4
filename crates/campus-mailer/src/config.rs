use std::time::Duration;

use campus_std::env::ReadEnv;

const DEFAULT_FROM_EMAIL: &str = "noreply@campus.example";
const DEFAULT_FROM_NAME: &str = "Campus";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Configuration for the mail transports.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Sender address (`CAMPUS_FROM_EMAIL`). Must be a verified sender in
    /// SendGrid for delivery to succeed.
    pub from_email: String,
    /// Sender display name (`CAMPUS_FROM_NAME`).
    pub from_name: String,
    /// Per-request timeout (`CAMPUS_MAIL_TIMEOUT_SECS`). Default: `30`.
    pub request_timeout: Duration,
    /// Retry attempts on 429 / 5xx errors (`CAMPUS_MAIL_RETRY_ATTEMPTS`).
    /// Default: `3`.
    pub retry_attempts: u32,
}

impl MailerConfig {
    pub fn from_env<E: ReadEnv>(env: &E) -> Self {
        let from_email = env
            .var("CAMPUS_FROM_EMAIL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string());

        let from_name = env
            .var("CAMPUS_FROM_NAME")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_FROM_NAME.to_string());

        let request_timeout = Duration::from_secs(
            env.var("CAMPUS_MAIL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        );

        let retry_attempts = env
            .var("CAMPUS_MAIL_RETRY_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RETRY_ATTEMPTS);

        Self {
            from_email,
            from_name,
            request_timeout,
            retry_attempts,
        }
    }
}
