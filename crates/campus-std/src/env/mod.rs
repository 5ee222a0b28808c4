//! Environment variable access behind a trait.
//!
//! # Examples
//!
//! ```
//! use campus_std::env::{ReadEnv, SystemEnv};
//!
//! fn sender_address<E: ReadEnv>(env: &E) -> String {
//!     env.var("CAMPUS_FROM_EMAIL")
//!         .unwrap_or_else(|_| "noreply@campus.example".to_string())
//! }
//!
//! let from = sender_address(&SystemEnv);
//! ```
//!
//! ```ignore
//! use campus_std::env::{ReadEnv, InMemoryEnv};
//!
//! let env = InMemoryEnv::new();
//! env.set("CAMPUS_FROM_EMAIL", "ops@school.test"); // &self, no `mut` needed
//! assert_eq!(sender_address(&env), "ops@school.test");
//! ```

mod in_memory;
mod read_env;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use read_env::ReadEnv;
pub use system::SystemEnv;
