//! The optional override tier.
//!
//! Deployments that cannot rebuild (or developers who want local values
//! without touching `local.properties`) inject an [`OverrideSource`] into
//! the resolver. The source is optional end to end: a resolver built
//! without one, or a source that returns `None` for a key, simply falls
//! through to the placeholder tier.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use campus_std::env::ReadEnv;

use crate::key::ConfigKey;

/// A secondary supplier of credential values.
///
/// Implementations must be `Send + Sync` so a resolver can be shared
/// across tasks, and must not fail; an unavailable value is `None`.
pub trait OverrideSource: Send + Sync {
    /// The override value for `key`, or `None` when this source does not
    /// supply it.
    fn value(&self, key: ConfigKey) -> Option<String>;
}

/// Thread-safe in-memory override map.
///
/// Backed by `Arc<Mutex<HashMap>>` so it is `Clone`, `Send`, and `Sync`;
/// clones share state. The usual source in tests and local tooling.
#[derive(Clone, Default)]
pub struct StaticOverrides {
    inner: Arc<Mutex<HashMap<ConfigKey, String>>>,
}

impl StaticOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one key's override value.
    pub fn set(&self, key: ConfigKey, value: impl Into<String>) {
        self.inner.lock().unwrap().insert(key, value.into());
    }

    pub fn remove(&self, key: ConfigKey) {
        self.inner.lock().unwrap().remove(&key);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

impl OverrideSource for StaticOverrides {
    fn value(&self, key: ConfigKey) -> Option<String> {
        self.inner.lock().unwrap().get(&key).cloned()
    }
}

/// Reads each key's `CAMPUS_*` variable from the process environment, so
/// a deployment can override compiled values without rebuilding.
pub struct EnvOverrides<E> {
    env: E,
}

impl<E: ReadEnv> EnvOverrides<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: ReadEnv + Send + Sync> OverrideSource for EnvOverrides<E> {
    fn value(&self, key: ConfigKey) -> Option<String> {
        self.env.var(key.build_var()).ok()
    }
}
