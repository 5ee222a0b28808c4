//! Layered credential resolution.

use tracing::{debug, warn};

use crate::build_config::BuildConfig;
use crate::key::ConfigKey;
use crate::overrides::OverrideSource;

/// Resolves credentials through the three tiers: build config, optional
/// override source, placeholder.
///
/// Resolution is pure and infallible: [`resolve`](Self::resolve) always
/// returns a value, degrading to the key's placeholder when nothing is
/// configured. Callers that need a real credential check
/// [`ResolvedCredentials::is_placeholder`] before use.
pub struct CredentialResolver {
    build: BuildConfig,
    overrides: Option<Box<dyn OverrideSource>>,
}

impl CredentialResolver {
    pub fn new(build: BuildConfig) -> Self {
        Self {
            build,
            overrides: None,
        }
    }

    /// Resolver over the values compiled into this binary.
    pub fn compiled() -> Self {
        Self::new(BuildConfig::compiled())
    }

    /// Attach an override source consulted when the build config has no
    /// value for a key.
    pub fn with_overrides(mut self, source: impl OverrideSource + 'static) -> Self {
        self.overrides = Some(Box::new(source));
        self
    }

    /// The best available value for `key`: build config first, then the
    /// override source, then the key's placeholder. Empty values at
    /// either tier fall through.
    pub fn resolve(&self, key: ConfigKey) -> String {
        if let Some(value) = self.build.get(key) {
            debug!(%key, "resolved from build config");
            return value.to_string();
        }

        if let Some(source) = &self.overrides
            && let Some(value) = source.value(key).filter(|v| !v.is_empty())
        {
            debug!(%key, "resolved from override source");
            return value;
        }

        warn!(%key, "no credential configured, using placeholder");
        key.placeholder().to_string()
    }

    /// Resolve every key once and freeze the results.
    ///
    /// Called once at process startup; the returned struct is immutable
    /// and `Send + Sync`, so consumers share it freely.
    pub fn load(self) -> ResolvedCredentials {
        ResolvedCredentials {
            sendgrid_api_key: self.resolve(ConfigKey::SendGridApiKey),
            email_script_url: self.resolve(ConfigKey::EmailScriptUrl),
            firebase_api_key: self.resolve(ConfigKey::FirebaseApiKey),
            imgbb_api_key: self.resolve(ConfigKey::ImgbbApiKey),
            google_maps_api_key: self.resolve(ConfigKey::GoogleMapsApiKey),
        }
    }
}

/// The credential set for one process lifetime, resolved once by
/// [`CredentialResolver::load`].
#[derive(Clone)]
pub struct ResolvedCredentials {
    sendgrid_api_key: String,
    email_script_url: String,
    firebase_api_key: String,
    imgbb_api_key: String,
    google_maps_api_key: String,
}

impl ResolvedCredentials {
    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::SendGridApiKey => &self.sendgrid_api_key,
            ConfigKey::EmailScriptUrl => &self.email_script_url,
            ConfigKey::FirebaseApiKey => &self.firebase_api_key,
            ConfigKey::ImgbbApiKey => &self.imgbb_api_key,
            ConfigKey::GoogleMapsApiKey => &self.google_maps_api_key,
        }
    }

    pub fn sendgrid_api_key(&self) -> &str {
        &self.sendgrid_api_key
    }

    pub fn email_script_url(&self) -> &str {
        &self.email_script_url
    }

    pub fn firebase_api_key(&self) -> &str {
        &self.firebase_api_key
    }

    pub fn imgbb_api_key(&self) -> &str {
        &self.imgbb_api_key
    }

    pub fn google_maps_api_key(&self) -> &str {
        &self.google_maps_api_key
    }

    /// True when `key` resolved to its placeholder, i.e. no real value
    /// was configured at any tier.
    pub fn is_placeholder(&self, key: ConfigKey) -> bool {
        self.get(key) == key.placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::StaticOverrides;

    #[test]
    fn build_value_wins() {
        let resolver = CredentialResolver::new(
            BuildConfig::empty().with(ConfigKey::FirebaseApiKey, "abc123"),
        );
        assert_eq!(resolver.resolve(ConfigKey::FirebaseApiKey), "abc123");
    }

    #[test]
    fn build_value_wins_over_override() {
        let overrides = StaticOverrides::new();
        overrides.set(ConfigKey::FirebaseApiKey, "from-override");
        let resolver = CredentialResolver::new(
            BuildConfig::empty().with(ConfigKey::FirebaseApiKey, "from-build"),
        )
        .with_overrides(overrides);
        assert_eq!(resolver.resolve(ConfigKey::FirebaseApiKey), "from-build");
    }

    #[test]
    fn override_fills_missing_build_value() {
        let overrides = StaticOverrides::new();
        overrides.set(ConfigKey::SendGridApiKey, "SG.override");
        let resolver =
            CredentialResolver::new(BuildConfig::empty()).with_overrides(overrides);
        assert_eq!(resolver.resolve(ConfigKey::SendGridApiKey), "SG.override");
    }

    #[test]
    fn empty_override_falls_through_to_placeholder() {
        let overrides = StaticOverrides::new();
        overrides.set(ConfigKey::SendGridApiKey, "");
        let resolver =
            CredentialResolver::new(BuildConfig::empty()).with_overrides(overrides);
        assert_eq!(
            resolver.resolve(ConfigKey::SendGridApiKey),
            ConfigKey::SendGridApiKey.placeholder()
        );
    }

    #[test]
    fn unconfigured_key_resolves_to_placeholder() {
        let resolver = CredentialResolver::new(BuildConfig::empty());
        assert_eq!(
            resolver.resolve(ConfigKey::EmailScriptUrl),
            "https://script.google.com/macros/s/YOUR-SCRIPT-ID-HERE/exec"
        );
    }

    #[test]
    fn every_key_resolves_without_any_configuration() {
        let resolver = CredentialResolver::new(BuildConfig::empty());
        for key in ConfigKey::ALL {
            assert_eq!(resolver.resolve(key), key.placeholder());
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let overrides = StaticOverrides::new();
        overrides.set(ConfigKey::ImgbbApiKey, "imgbb-key");
        let resolver =
            CredentialResolver::new(BuildConfig::empty()).with_overrides(overrides);
        let first = resolver.resolve(ConfigKey::ImgbbApiKey);
        let second = resolver.resolve(ConfigKey::ImgbbApiKey);
        assert_eq!(first, second);
    }

    #[test]
    fn load_freezes_each_tier() {
        let overrides = StaticOverrides::new();
        overrides.set(ConfigKey::SendGridApiKey, "SG.from-override");
        let creds = CredentialResolver::new(
            BuildConfig::empty().with(ConfigKey::FirebaseApiKey, "abc123"),
        )
        .with_overrides(overrides)
        .load();

        assert_eq!(creds.get(ConfigKey::FirebaseApiKey), "abc123");
        assert_eq!(creds.get(ConfigKey::SendGridApiKey), "SG.from-override");
        assert_eq!(
            creds.get(ConfigKey::GoogleMapsApiKey),
            ConfigKey::GoogleMapsApiKey.placeholder()
        );
    }

    #[test]
    fn load_results_do_not_track_later_override_changes() {
        let overrides = StaticOverrides::new();
        overrides.set(ConfigKey::FirebaseApiKey, "before");
        let resolver =
            CredentialResolver::new(BuildConfig::empty()).with_overrides(overrides.clone());
        let creds = resolver.load();

        overrides.set(ConfigKey::FirebaseApiKey, "after");
        assert_eq!(creds.get(ConfigKey::FirebaseApiKey), "before");
    }

    #[test]
    fn is_placeholder_tracks_configuration() {
        let creds = CredentialResolver::new(
            BuildConfig::empty().with(ConfigKey::FirebaseApiKey, "abc123"),
        )
        .load();
        assert!(!creds.is_placeholder(ConfigKey::FirebaseApiKey));
        assert!(creds.is_placeholder(ConfigKey::SendGridApiKey));
    }

    #[test]
    fn named_accessors_match_get() {
        let creds = CredentialResolver::new(
            BuildConfig::empty()
                .with(ConfigKey::SendGridApiKey, "SG.k")
                .with(ConfigKey::EmailScriptUrl, "https://relay.test/exec")
                .with(ConfigKey::FirebaseApiKey, "fb")
                .with(ConfigKey::ImgbbApiKey, "im")
                .with(ConfigKey::GoogleMapsApiKey, "gm"),
        )
        .load();

        assert_eq!(creds.sendgrid_api_key(), creds.get(ConfigKey::SendGridApiKey));
        assert_eq!(creds.email_script_url(), creds.get(ConfigKey::EmailScriptUrl));
        assert_eq!(creds.firebase_api_key(), creds.get(ConfigKey::FirebaseApiKey));
        assert_eq!(creds.imgbb_api_key(), creds.get(ConfigKey::ImgbbApiKey));
        assert_eq!(
            creds.google_maps_api_key(),
            creds.get(ConfigKey::GoogleMapsApiKey)
        );
    }

    /// A value configured to exactly the placeholder string is
    /// indistinguishable from an unconfigured key; `is_placeholder`
    /// reports it as such.
    #[test]
    fn explicitly_configured_placeholder_value_reads_as_placeholder() {
        let creds = CredentialResolver::new(
            BuildConfig::empty()
                .with(ConfigKey::ImgbbApiKey, ConfigKey::ImgbbApiKey.placeholder()),
        )
        .load();
        assert!(creds.is_placeholder(ConfigKey::ImgbbApiKey));
    }
}
