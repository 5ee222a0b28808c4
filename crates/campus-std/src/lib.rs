//! Zero-cost abstractions over `std` for campus services.
//!
//! Every configuration loader in the workspace reads the environment
//! through [`ReadEnv`] instead of calling `std::env::var` directly, so a
//! test can supply an [`InMemoryEnv`] without mutating the process
//! environment.
//!
//! | Concern  | Trait      | Production    | Test           |
//! |----------|------------|---------------|----------------|
//! | Env vars | [`ReadEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! [`SystemEnv`] is zero-sized and trivially `Send + Sync`.
//! [`InMemoryEnv`] is `RefCell`-backed and therefore not `Sync`; wrap it
//! yourself if a multi-threaded test needs to share one.

pub mod env;

pub use env::{ReadEnv, SystemEnv};

#[cfg(any(test, feature = "test-support"))]
pub use env::InMemoryEnv;
