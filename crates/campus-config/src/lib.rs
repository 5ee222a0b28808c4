//! Layered API-credential resolution for campus services.
//!
//! A credential is looked up through three tiers, first non-empty match
//! wins:
//!
//! 1. the value compiled in at build time ([`BuildConfig`], fed by
//!    `build.rs` from the untracked `local.properties` file),
//! 2. an optional [`OverrideSource`] injected at construction,
//! 3. the key's placeholder string.
//!
//! Resolution never fails: a fully unconfigured deployment runs with
//! placeholder values, and [`diagnostic::audit`] reports which keys those
//! are.
//!
//! # Quick Start
//!
//! ```
//! use campus_config::{BuildConfig, ConfigKey, CredentialResolver, StaticOverrides};
//!
//! let overrides = StaticOverrides::new();
//! overrides.set(ConfigKey::FirebaseApiKey, "abc123");
//!
//! let creds = CredentialResolver::new(BuildConfig::empty())
//!     .with_overrides(overrides)
//!     .load();
//!
//! assert_eq!(creds.get(ConfigKey::FirebaseApiKey), "abc123");
//! assert!(creds.is_placeholder(ConfigKey::SendGridApiKey));
//! ```

pub mod build_config;
pub mod diagnostic;
pub mod key;
pub mod overrides;
pub mod resolver;

pub use build_config::BuildConfig;
pub use diagnostic::{DiagnosticReport, KeyStatus, audit};
pub use key::ConfigKey;
pub use overrides::{EnvOverrides, OverrideSource, StaticOverrides};
pub use resolver::{CredentialResolver, ResolvedCredentials};
