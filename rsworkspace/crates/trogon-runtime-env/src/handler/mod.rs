//! Per-runtime operation handlers.
//!
//! Writing and deleting are the same on every host; only the store behind
//! them differs. Reading diverges per host and lives in one module each.

pub(crate) mod bun;
pub(crate) mod deno;
pub(crate) mod node;

use std::env::VarError;

use tracing::warn;
use trogon_std::env::{ReadEnv, RemoveEnv, WriteEnv};

use crate::error::{Error, Result};
use crate::gate::VersionGate;

pub(crate) fn set<S: WriteEnv>(
    gate: &VersionGate,
    store: &S,
    key: &str,
    value: &str,
) -> Result<()> {
    gate.check()?;
    store.set_var(key, value).map_err(|e| {
        warn!(key, error = %e, "failed to set environment variable");
        Error::failure(e)
    })
}

pub(crate) fn delete<S: RemoveEnv>(gate: &VersionGate, store: &S, key: &str) -> Result<()> {
    gate.check()?;
    store.remove_var(key).map_err(|e| {
        warn!(key, error = %e, "failed to delete environment variable");
        Error::failure(e)
    })
}

/// Absent and set-to-empty stay distinct: `Ok(None)` vs `Ok(Some(""))`.
fn read_var<S: ReadEnv>(store: &S, key: &str) -> std::result::Result<Option<String>, VarError> {
    match store.var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e),
    }
}

fn read_failure(key: &str, err: VarError) -> Error {
    warn!(key, error = %err, "failed to read environment variable");
    Error::failure(err)
}
