//! Mail delivery for campus services.
//!
//! Two transports, both fed by credentials resolved through
//! `campus-config`:
//!
//! - [`SendGridMailer`]: the SendGrid v3 `mail/send` API, used when a
//!   real API key is configured.
//! - [`ScriptMailer`]: the Apps-Script relay endpoint, a fallback for
//!   deployments without a SendGrid account.
//!
//! Construction fails with [`MailError::CredentialUnconfigured`] when the
//! transport's credential resolved to a placeholder, so a misconfigured
//! deployment is caught before the first request leaves the process.

pub mod config;
pub mod error;
pub mod message;
pub mod script;
pub mod sendgrid;

pub use config::MailerConfig;
pub use error::{MailError, Result};
pub use message::{Attachment, Message};
pub use script::ScriptMailer;
pub use sendgrid::SendGridMailer;
