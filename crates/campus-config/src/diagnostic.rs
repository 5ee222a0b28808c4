//! Credential audit.
//!
//! Resolution never fails, so a misconfigured deployment runs with
//! placeholders until something downstream rejects them. The audit makes
//! that state visible: it classifies every resolved key and renders a
//! report with secrets redacted.

use std::fmt;

use serde::Serialize;

use crate::key::ConfigKey;
use crate::resolver::ResolvedCredentials;

/// Shown characters of a redacted secret.
const PREVIEW_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStatus {
    /// A real value is configured.
    Configured,
    /// Nothing configured anywhere; the key resolved to its placeholder.
    Placeholder,
    /// A value is configured but does not look like one this key accepts.
    Malformed,
}

impl KeyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configured => "configured",
            Self::Placeholder => "placeholder",
            Self::Malformed => "malformed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyDiagnostic {
    pub key: ConfigKey,
    pub status: KeyStatus,
    /// Redacted for secret keys, verbatim for the relay URL.
    pub preview: String,
}

/// Per-key audit results, one entry per [`ConfigKey`], in `ALL` order.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    entries: Vec<KeyDiagnostic>,
}

impl DiagnosticReport {
    pub fn entries(&self) -> &[KeyDiagnostic] {
        &self.entries
    }

    /// True when every key has a real, well-formed value.
    pub fn is_fully_configured(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.status == KeyStatus::Configured)
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "{:<22} {:<12} {}",
                entry.key.as_str(),
                entry.status.as_str(),
                entry.preview
            )?;
        }
        Ok(())
    }
}

/// Classify every resolved key. Never fails.
pub fn audit(creds: &ResolvedCredentials) -> DiagnosticReport {
    let entries = ConfigKey::ALL
        .iter()
        .map(|&key| {
            let value = creds.get(key);
            KeyDiagnostic {
                key,
                status: classify(key, value, creds.is_placeholder(key)),
                preview: preview(key, value),
            }
        })
        .collect();
    DiagnosticReport { entries }
}

fn classify(key: ConfigKey, value: &str, is_placeholder: bool) -> KeyStatus {
    if is_placeholder {
        return KeyStatus::Placeholder;
    }
    let well_formed = match key {
        // SendGrid keys are issued with an "SG." prefix.
        ConfigKey::SendGridApiKey => value.starts_with("SG."),
        ConfigKey::EmailScriptUrl => value.starts_with("https://"),
        _ => true,
    };
    if well_formed {
        KeyStatus::Configured
    } else {
        KeyStatus::Malformed
    }
}

fn preview(key: ConfigKey, value: &str) -> String {
    if !key.is_secret() {
        return value.to_string();
    }
    let total = value.chars().count();
    if total <= PREVIEW_LEN {
        return "***".to_string();
    }
    let prefix: String = value.chars().take(PREVIEW_LEN).collect();
    format!("{prefix}*** ({total} chars)")
}
