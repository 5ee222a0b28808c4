//! SendGrid v3 transport.

use std::time::Duration;

use campus_config::{ConfigKey, ResolvedCredentials};
use reqwest::Client as HttpClient;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::MailerConfig;
use crate::error::{MailError, Result};
use crate::message::Message;

const MAIL_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";
const SCOPES_URL: &str = "https://api.sendgrid.com/v3/scopes";
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Serialize)]
struct EmailAddress<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<EmailAddress<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: String,
}

#[derive(Serialize)]
struct WireAttachment<'a> {
    content: String,
    filename: &'a str,
    #[serde(rename = "type")]
    mime_type: &'a str,
    disposition: &'static str,
}

#[derive(Serialize)]
struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: EmailAddress<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<WireAttachment<'a>>,
}

/// Sends mail through the SendGrid `mail/send` API.
#[derive(Debug)]
pub struct SendGridMailer {
    http: HttpClient,
    api_key: String,
    from_email: String,
    from_name: String,
    retry_attempts: u32,
}

impl SendGridMailer {
    /// Fails with [`MailError::CredentialUnconfigured`] when the SendGrid
    /// key resolved to its placeholder.
    pub fn new(config: &MailerConfig, creds: &ResolvedCredentials) -> Result<Self> {
        if creds.is_placeholder(ConfigKey::SendGridApiKey) {
            return Err(MailError::CredentialUnconfigured(ConfigKey::SendGridApiKey));
        }
        let http = HttpClient::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            api_key: creds.sendgrid_api_key().to_string(),
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
            retry_attempts: config.retry_attempts,
        })
    }

    fn payload<'a>(&'a self, message: &'a Message) -> MailSendRequest<'a> {
        MailSendRequest {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: message.to(),
                    name: None,
                }],
            }],
            from: EmailAddress {
                email: &self.from_email,
                name: Some(&self.from_name),
            },
            subject: message.subject(),
            content: vec![Content {
                content_type: "text/html",
                value: message.html_body(),
            }],
            attachments: message
                .attachments()
                .iter()
                .map(|a| WireAttachment {
                    content: a.encoded(),
                    filename: a.filename(),
                    mime_type: a.mime_type(),
                    disposition: "attachment",
                })
                .collect(),
        }
    }

    /// Deliver `message`, retrying 429 and 5xx responses with doubling
    /// backoff up to the configured attempt count.
    pub async fn send(&self, message: &Message) -> Result<()> {
        let body_bytes = serde_json::to_vec(&self.payload(message))?;
        let attempts = self.retry_attempts.max(1);
        let mut delay = INITIAL_BACKOFF;
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self
                .http
                .post(MAIL_SEND_URL)
                .bearer_auth(&self.api_key)
                .header("content-type", "application/json")
                .body(body_bytes.clone())
                .send()
                .await
            {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        debug!(to = message.to(), %status, "mail accepted");
                        return Ok(());
                    }
                    let body = resp.text().await.unwrap_or_default();
                    let retryable = status.as_u16() == 429 || status.is_server_error();
                    if retryable && attempt < attempts {
                        warn!(attempt, %status, retry_in = ?delay, "SendGrid retryable error, retrying");
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

    /// Check the key against the API without sending anything
    /// (`GET /v3/scopes` answers 200 for a valid key).
    pub async fn verify_key(&self) -> Result<bool> {
        let resp = self
            .http
            .get(SCOPES_URL)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Ok(resp.status().is_success())
    }
}
