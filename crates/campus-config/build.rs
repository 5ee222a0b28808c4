//! Bakes deployment credentials into the crate at build time.
//!
//! Values come from `local.properties` at the workspace root (untracked;
//! see `local.properties.example`), falling back to same-named variables
//! in the build environment. A key configured in neither place emits no
//! `rustc-env` line, which the crate observes as `option_env!` → `None`.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const KEYS: [&str; 5] = [
    "CAMPUS_SENDGRID_API_KEY",
    "CAMPUS_EMAIL_SCRIPT_URL",
    "CAMPUS_FIREBASE_API_KEY",
    "CAMPUS_IMGBB_API_KEY",
    "CAMPUS_GOOGLE_MAPS_API_KEY",
];

fn main() {
    let properties_path = workspace_root().join("local.properties");
    println!("cargo:rerun-if-changed={}", properties_path.display());

    let properties = match fs::read_to_string(&properties_path) {
        Ok(contents) => parse_properties(&contents),
        Err(_) => HashMap::new(),
    };

    for key in KEYS {
        println!("cargo:rerun-if-env-changed={key}");

        let value = properties
            .get(key)
            .cloned()
            .or_else(|| env::var(key).ok())
            .unwrap_or_default();

        if !value.is_empty() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// `KEY=VALUE` lines; `#` starts a comment; whitespace around either side
/// is trimmed. Later occurrences of a key win.
fn parse_properties(contents: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}
