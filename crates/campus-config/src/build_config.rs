//! The compiled-in configuration tier.

use crate::key::ConfigKey;

/// Credential values baked into the binary at build time.
///
/// `build.rs` reads the untracked `local.properties` file (or the build
/// environment) and re-emits each configured key as a `CAMPUS_*` rustc
/// env var; [`BuildConfig::compiled`] captures those through
/// `option_env!`. Keys configured nowhere are `None`.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    sendgrid_api_key: Option<String>,
    email_script_url: Option<String>,
    firebase_api_key: Option<String>,
    imgbb_api_key: Option<String>,
    google_maps_api_key: Option<String>,
}

impl BuildConfig {
    /// The values compiled into this binary.
    pub fn compiled() -> Self {
        Self {
            sendgrid_api_key: option_env!("CAMPUS_SENDGRID_API_KEY").map(str::to_string),
            email_script_url: option_env!("CAMPUS_EMAIL_SCRIPT_URL").map(str::to_string),
            firebase_api_key: option_env!("CAMPUS_FIREBASE_API_KEY").map(str::to_string),
            imgbb_api_key: option_env!("CAMPUS_IMGBB_API_KEY").map(str::to_string),
            google_maps_api_key: option_env!("CAMPUS_GOOGLE_MAPS_API_KEY").map(str::to_string),
        }
    }

    /// A config with no key set. Compile-time values cannot be varied
    /// inside a test binary, so tests start here and add values with
    /// [`with`](Self::with).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set one key's value (builder style).
    pub fn with(mut self, key: ConfigKey, value: impl Into<String>) -> Self {
        let slot = match key {
            ConfigKey::SendGridApiKey => &mut self.sendgrid_api_key,
            ConfigKey::EmailScriptUrl => &mut self.email_script_url,
            ConfigKey::FirebaseApiKey => &mut self.firebase_api_key,
            ConfigKey::ImgbbApiKey => &mut self.imgbb_api_key,
            ConfigKey::GoogleMapsApiKey => &mut self.google_maps_api_key,
        };
        *slot = Some(value.into());
        self
    }

    /// The build-time value for `key`, or `None` when unset or empty.
    ///
    /// The build step defaults missing properties to `""`, so the empty
    /// string marks absence; whitespace-only values are carried verbatim.
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        let value = match key {
            ConfigKey::SendGridApiKey => &self.sendgrid_api_key,
            ConfigKey::EmailScriptUrl => &self.email_script_url,
            ConfigKey::FirebaseApiKey => &self.firebase_api_key,
            ConfigKey::ImgbbApiKey => &self.imgbb_api_key,
            ConfigKey::GoogleMapsApiKey => &self.google_maps_api_key,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}
