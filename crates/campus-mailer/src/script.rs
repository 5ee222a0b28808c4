//! Apps-Script relay transport.
//!
//! The relay is a deployed script that accepts a small JSON body and
//! forwards the message from its own account. Deployments without a
//! SendGrid key route mail through it.

use std::time::Duration;

use campus_config::{ConfigKey, ResolvedCredentials};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::MailerConfig;
use crate::error::{MailError, Result};
use crate::message::Message;

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Serialize)]
struct RelayRequest<'a> {
    to: &'a str,
    subject: &'a str,
    html_body: String,
}

/// The relay answers 200 even for handled failures; the body carries the
/// actual outcome.
#[derive(Deserialize)]
struct RelayResponse {
    status: Option<String>,
}

/// Sends mail through the Apps-Script relay endpoint.
#[derive(Debug)]
pub struct ScriptMailer {
    http: HttpClient,
    url: String,
    retry_attempts: u32,
}

impl ScriptMailer {
    /// Fails with [`MailError::CredentialUnconfigured`] when the relay
    /// URL resolved to its placeholder.
    pub fn new(config: &MailerConfig, creds: &ResolvedCredentials) -> Result<Self> {
        if creds.is_placeholder(ConfigKey::EmailScriptUrl) {
            return Err(MailError::CredentialUnconfigured(ConfigKey::EmailScriptUrl));
        }
        let http = HttpClient::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            url: creds.email_script_url().to_string(),
            retry_attempts: config.retry_attempts,
        })
    }

    pub async fn send(&self, message: &Message) -> Result<()> {
        let payload = RelayRequest {
            to: message.to(),
            subject: message.subject(),
            html_body: message.html_body(),
        };
        let body_bytes = serde_json::to_vec(&payload)?;
        let attempts = self.retry_attempts.max(1);
        let mut delay = INITIAL_BACKOFF;
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self
                .http
                .post(&self.url)
                .header("content-type", "application/json")
                .body(body_bytes.clone())
                .send()
                .await
            {
                Ok(resp) => {
                    let status = resp.status();
                    let body = resp.text().await.unwrap_or_default();
                    if status.is_success() {
                        return check_relay_outcome(message.to(), status.as_u16(), body);
                    }
                    let retryable = status.as_u16() == 429 || status.is_server_error();
                    if retryable && attempt < attempts {
                        warn!(attempt, %status, retry_in = ?delay, "relay retryable error, retrying");
                        tokio::time::sleep(delay).await;
                        delay *= 2;
                    } else {
                        return Err(MailError::Api {
                            status: status.as_u16(),
                            body,
                        });
                    }
                }
                Err(e) => {
                    if attempt < attempts {
                        warn!(attempt, error = %e, "HTTP error, retrying");
                        tokio::time::sleep(delay).await;
                        delay *= 2;
                    } else {
                        return Err(MailError::Http(e));
                    }
                }
            }
        }
    }
}

/// A 2xx with `{"status": "ok"}` (or a non-JSON body; older script
/// versions answer plain text) is success; any other reported status is
/// a handled failure.
fn check_relay_outcome(to: &str, status: u16, body: String) -> Result<()> {
    match serde_json::from_str::<RelayResponse>(&body) {
        Ok(RelayResponse {
            status: Some(reported),
        }) if reported != "ok" => Err(MailError::Api { status, body }),
        _ => {
            debug!(to, "relay accepted message");
            Ok(())
        }
    }
}
