//! Credential key value objects.

use std::fmt;

/// The configuration keys the platform resolves credentials for.
///
/// Each key maps to one `CAMPUS_*` build-time variable (see
/// `local.properties.example`) and carries a fixed placeholder returned
/// when no real value is configured anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// SendGrid mail API key (`SG.`-prefixed).
    SendGridApiKey,
    /// Apps-Script mail relay endpoint.
    EmailScriptUrl,
    /// Firebase web API key.
    FirebaseApiKey,
    /// imgbb image-hosting API key.
    ImgbbApiKey,
    /// Google Maps API key.
    GoogleMapsApiKey,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::SendGridApiKey,
        ConfigKey::EmailScriptUrl,
        ConfigKey::FirebaseApiKey,
        ConfigKey::ImgbbApiKey,
        ConfigKey::GoogleMapsApiKey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SendGridApiKey => "sendgrid_api_key",
            Self::EmailScriptUrl => "email_script_url",
            Self::FirebaseApiKey => "firebase_api_key",
            Self::ImgbbApiKey => "imgbb_api_key",
            Self::GoogleMapsApiKey => "google_maps_api_key",
        }
    }

    /// Name of the build-time variable (and the runtime override read by
    /// [`EnvOverrides`](crate::EnvOverrides)) for this key.
    pub fn build_var(&self) -> &'static str {
        match self {
            Self::SendGridApiKey => "CAMPUS_SENDGRID_API_KEY",
            Self::EmailScriptUrl => "CAMPUS_EMAIL_SCRIPT_URL",
            Self::FirebaseApiKey => "CAMPUS_FIREBASE_API_KEY",
            Self::ImgbbApiKey => "CAMPUS_IMGBB_API_KEY",
            Self::GoogleMapsApiKey => "CAMPUS_GOOGLE_MAPS_API_KEY",
        }
    }

    /// The fixed value returned when a key is configured nowhere.
    ///
    /// Non-functional on purpose: requests sent with one of these fail at
    /// the remote end, while the string itself tells a developer which
    /// property is missing.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::SendGridApiKey => "YOUR_SENDGRID_API_KEY",
            Self::EmailScriptUrl => "https://script.google.com/macros/s/YOUR-SCRIPT-ID-HERE/exec",
            Self::FirebaseApiKey => "YOUR_FIREBASE_API_KEY",
            Self::ImgbbApiKey => "YOUR_IMGBB_API_KEY",
            Self::GoogleMapsApiKey => "YOUR_GOOGLE_MAPS_API_KEY",
        }
    }

    /// Secret keys are redacted in logs and diagnostic output; the relay
    /// URL is not a secret.
    pub fn is_secret(&self) -> bool {
        !matches!(self, Self::EmailScriptUrl)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ConfigKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_key_once() {
        for key in ConfigKey::ALL {
            assert_eq!(
                ConfigKey::ALL.iter().filter(|k| **k == key).count(),
                1,
                "{key} listed more than once"
            );
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ConfigKey::SendGridApiKey.to_string(), "sendgrid_api_key");
        assert_eq!(ConfigKey::EmailScriptUrl.to_string(), "email_script_url");
    }

    #[test]
    fn build_vars_are_prefixed_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for key in ConfigKey::ALL {
            assert!(key.build_var().starts_with("CAMPUS_"));
            assert!(seen.insert(key.build_var()));
        }
    }

    #[test]
    fn script_url_placeholder_is_the_template_url() {
        assert_eq!(
            ConfigKey::EmailScriptUrl.placeholder(),
            "https://script.google.com/macros/s/YOUR-SCRIPT-ID-HERE/exec"
        );
    }

    #[test]
    fn placeholders_are_non_empty_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for key in ConfigKey::ALL {
            assert!(!key.placeholder().is_empty());
            assert!(seen.insert(key.placeholder()));
        }
    }

    #[test]
    fn only_the_relay_url_is_not_secret() {
        for key in ConfigKey::ALL {
            assert_eq!(key.is_secret(), key != ConfigKey::EmailScriptUrl);
        }
    }

    #[test]
    fn serializes_as_its_snake_case_name() {
        let json = serde_json::to_string(&ConfigKey::SendGridApiKey).unwrap();
        assert_eq!(json, "\"sendgrid_api_key\"");
    }
}
