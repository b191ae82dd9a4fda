//! Zero-cost abstractions over `std` for TrogonStack projects.
//!
//! # Quick Start
//!
//! | Concern | Trait(s) | Production | Test |
//! |---------|----------|------------|------|
//! | Env vars | [`ReadEnv`], [`WriteEnv`], [`RemoveEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//! | Filesystem | [`ReadFile`], [`ExistsFile`] | [`SystemFs`] | [`MemFs`]* |
//! | Startup args | [`ReadArgs`] | [`SystemArgs`] | [`FixedArgs`]* |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! # Thread Safety
//!
//! Production types ([`SystemEnv`], [`SystemFs`], [`SystemArgs`])
//! are zero-sized and trivially `Send + Sync`. Writes through
//! [`SystemEnv`] still mutate the one process-wide environment table;
//! see its docs for the contract.
//!
//! | Test type | Backing | `Send + Sync` |
//! |-----------|---------|---------------|
//! | [`MemFs`] | `RefCell<HashMap>` | No |
//! | [`InMemoryEnv`] | `RefCell<HashMap>` | No |
//! | [`FixedArgs`] | `Vec<String>` | Yes |
//!
//! [`InMemoryEnv`]: env::InMemoryEnv
//! [`MemFs`]: fs::MemFs
//! [`FixedArgs`]: args::FixedArgs

pub mod args;
pub mod env;
pub mod fs;

pub use args::{ReadArgs, SystemArgs};
pub use env::{ReadEnv, RemoveEnv, SystemEnv, WriteEnv};
pub use fs::{ExistsFile, ReadFile, SystemFs};
