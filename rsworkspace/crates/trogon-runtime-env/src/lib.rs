//! # trogon-runtime-env
//!
//! One `get`/`set`/`delete` surface over process environment variables for
//! code hosted by Node.js, Deno or Bun.
//!
//! The hosts disagree on the details:
//!
//! | Host | `.env` loading | Permission model | Minimum |
//! |------|----------------|------------------|---------|
//! | Node.js | `--env-file=` flag, otherwise loaded on first read | none | 18.0.0 (20.6.0 with `--env-file=`) |
//! | Deno | loaded on read when `read` permission is granted | `--allow-*` / `--deny-*` | 1.30.0 |
//! | Bun | automatic | none | 1.0.0 |
//!
//! [`RuntimeEnv`] hides those differences. Every operation first checks the
//! host version, then runs the host's pre-step, then touches the store, and
//! reports any failure as an [`Error`] instead of panicking.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use trogon_runtime_env::SystemRuntimeEnv;
//!
//! // TROGON_RUNTIME=node TROGON_RUNTIME_VERSION=v20.11.1
//! let env = SystemRuntimeEnv::system().expect("host not configured");
//!
//! env.set("PORT", "8080")?;
//! assert_eq!(env.get("PORT")?.as_deref(), Some("8080"));
//! env.delete("PORT")?;
//! assert_eq!(env.get("PORT")?, None);
//! # Ok::<(), trogon_runtime_env::Error>(())
//! ```
//!
//! ## Testing
//!
//! Every collaborator is a trait. With the `test-support` feature,
//! [`mocks`] provides counting doubles and `trogon-std` provides
//! `InMemoryEnv` and `FixedArgs`.

pub mod config;
pub mod error;
pub mod gate;
pub mod loader;
#[cfg(any(test, feature = "test-support"))]
pub mod mocks;
pub mod permission;
pub mod runtime;
pub mod version;

mod handler;
mod runtime_env;

pub use config::{ConfigError, RuntimeEnvConfig};
pub use error::{Error, Result};
pub use gate::{Profile, VersionGate};
pub use loader::{DotenvLoader, LoadEnvFile};
pub use permission::{ArgsPermissions, Capability, PermissionState, QueryPermission};
pub use runtime::{HostInfo, Runtime, UnknownRuntime};
pub use runtime_env::{RuntimeEnv, SystemRuntimeEnv};
pub use version::{HostVersion, VersionError, is_at_least};
