//! End-to-end resolution: build tier, override tier, placeholder tier,
//! and the audit over the loaded result.

use std::sync::Mutex;

use campus_config::{
    BuildConfig, ConfigKey, CredentialResolver, EnvOverrides, KeyStatus, StaticOverrides, audit,
};
use campus_std::env::{InMemoryEnv, ReadEnv};

/// `OverrideSource` requires `Send + Sync`; `InMemoryEnv` is
/// `RefCell`-backed, so tests share it behind a `Mutex`.
struct SharedEnv(Mutex<InMemoryEnv>);

impl SharedEnv {
    fn new(env: InMemoryEnv) -> Self {
        Self(Mutex::new(env))
    }
}

impl ReadEnv for SharedEnv {
    fn var(&self, key: &str) -> Result<String, std::env::VarError> {
        self.0.lock().unwrap().var(key)
    }
}

#[test]
fn build_tier_beats_env_overrides() {
    let env = InMemoryEnv::new();
    env.set("CAMPUS_FIREBASE_API_KEY", "env-value");

    let creds = CredentialResolver::new(
        BuildConfig::empty().with(ConfigKey::FirebaseApiKey, "build-value"),
    )
    .with_overrides(EnvOverrides::new(SharedEnv::new(env)))
    .load();

    assert_eq!(creds.firebase_api_key(), "build-value");
}

#[test]
fn env_overrides_fill_the_gaps_left_by_the_build() {
    let env = InMemoryEnv::new();
    env.set("CAMPUS_SENDGRID_API_KEY", "SG.env-key");
    env.set("CAMPUS_EMAIL_SCRIPT_URL", "https://relay.test/exec");

    let creds = CredentialResolver::new(
        BuildConfig::empty().with(ConfigKey::FirebaseApiKey, "build-value"),
    )
    .with_overrides(EnvOverrides::new(SharedEnv::new(env)))
    .load();

    assert_eq!(creds.firebase_api_key(), "build-value");
    assert_eq!(creds.sendgrid_api_key(), "SG.env-key");
    assert_eq!(creds.email_script_url(), "https://relay.test/exec");
    // Nothing supplied either key below.
    assert!(creds.is_placeholder(ConfigKey::ImgbbApiKey));
    assert!(creds.is_placeholder(ConfigKey::GoogleMapsApiKey));
}

#[test]
fn empty_env_values_fall_through_to_placeholders() {
    let env = InMemoryEnv::new();
    env.set("CAMPUS_IMGBB_API_KEY", "");

    let creds = CredentialResolver::new(BuildConfig::empty())
        .with_overrides(EnvOverrides::new(SharedEnv::new(env)))
        .load();

    assert_eq!(
        creds.imgbb_api_key(),
        ConfigKey::ImgbbApiKey.placeholder()
    );
}

#[test]
fn fully_unconfigured_pipeline_yields_the_pinned_placeholders() {
    let creds = CredentialResolver::new(BuildConfig::empty())
        .with_overrides(StaticOverrides::new())
        .load();

    assert_eq!(
        creds.email_script_url(),
        "https://script.google.com/macros/s/YOUR-SCRIPT-ID-HERE/exec"
    );
    for key in ConfigKey::ALL {
        assert_eq!(creds.get(key), key.placeholder());
    }
}

#[test]
fn audit_reflects_the_mixed_outcome() {
    let overrides = StaticOverrides::new();
    overrides.set(ConfigKey::SendGridApiKey, "SG.real-key-material");

    let creds = CredentialResolver::new(
        BuildConfig::empty().with(ConfigKey::EmailScriptUrl, "https://relay.test/exec"),
    )
    .with_overrides(overrides)
    .load();

    let report = audit(&creds);
    assert!(!report.is_fully_configured());

    let status_of = |key: ConfigKey| {
        report
            .entries()
            .iter()
            .find(|e| e.key == key)
            .unwrap()
            .status
    };
    assert_eq!(status_of(ConfigKey::SendGridApiKey), KeyStatus::Configured);
    assert_eq!(status_of(ConfigKey::EmailScriptUrl), KeyStatus::Configured);
    assert_eq!(status_of(ConfigKey::FirebaseApiKey), KeyStatus::Placeholder);
}

#[test]
fn resolver_without_override_source_still_resolves_everything() {
    let resolver = CredentialResolver::new(BuildConfig::empty());
    for key in ConfigKey::ALL {
        let value = resolver.resolve(key);
        assert!(!value.is_empty());
        assert_eq!(value, resolver.resolve(key));
    }
}
