//! Test doubles for the collaborators behind [`RuntimeEnv`](crate::RuntimeEnv).
//!
//! Enabled with the `test-support` feature:
//!
//! ```toml
//! [dev-dependencies]
//! trogon-runtime-env = { path = "...", features = ["test-support"] }
//! ```

use std::env::VarError;
use std::ffi::OsString;
use std::io;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use trogon_std::env::{ReadEnv, RemoveEnv, WriteEnv};

use crate::loader::LoadEnvFile;
use crate::permission::{Capability, PermissionState, QueryPermission};

// ── CountingLoader ────────────────────────────────────────────────────────────

/// Counts [`LoadEnvFile::load_if_needed`] calls.
///
/// Clones share the counter, so a test can keep one clone and hand the
/// other to the code under test. Optionally writes a fixed set of
/// variables (only those not already set, like a real loader) or fails
/// every call.
#[derive(Clone, Default)]
pub struct CountingLoader {
    calls: Arc<AtomicUsize>,
    vars: Vec<(String, String)>,
    error: Option<String>,
}

impl CountingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LoadEnvFile for CountingLoader {
    fn load_if_needed<S: ReadEnv + WriteEnv>(&self, store: &S) -> io::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.error {
            return Err(io::Error::other(message.clone()));
        }
        for (key, value) in &self.vars {
            if matches!(store.var(key), Err(VarError::NotPresent)) {
                store.set_var(key, value)?;
            }
        }
        Ok(())
    }
}

// ── FixedPermissions ──────────────────────────────────────────────────────────

/// Answers every query with the same state and counts the queries.
#[derive(Clone)]
pub struct FixedPermissions {
    answer: Result<PermissionState, String>,
    calls: Arc<AtomicUsize>,
}

impl FixedPermissions {
    pub fn new(state: PermissionState) -> Self {
        Self {
            answer: Ok(state),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn granted() -> Self {
        Self::new(PermissionState::Granted)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            answer: Err(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QueryPermission for FixedPermissions {
    fn query(&self, _capability: Capability) -> io::Result<PermissionState> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone().map_err(io::Error::other)
    }
}

// ── FailingEnv ────────────────────────────────────────────────────────────────

/// A store whose every primitive fails with `message`.
///
/// Reads fail with [`VarError::NotUnicode`], the only failure
/// `std::env::var` has besides absence.
#[derive(Debug, Clone)]
pub struct FailingEnv {
    message: String,
}

impl FailingEnv {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ReadEnv for FailingEnv {
    fn var(&self, _key: &str) -> Result<String, VarError> {
        Err(VarError::NotUnicode(OsString::from(&self.message)))
    }
}

impl WriteEnv for FailingEnv {
    fn set_var(&self, _key: &str, _value: &str) -> io::Result<()> {
        Err(io::Error::other(self.message.clone()))
    }
}

impl RemoveEnv for FailingEnv {
    fn remove_var(&self, _key: &str) -> io::Result<()> {
        Err(io::Error::other(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use trogon_std::env::InMemoryEnv;

    use super::*;

    #[test]
    fn test_counting_loader_shares_counter_across_clones() {
        let loader = CountingLoader::new();
        let handle = loader.clone();
        let store = InMemoryEnv::new();

        loader.load_if_needed(&store).unwrap();
        loader.load_if_needed(&store).unwrap();

        assert_eq!(handle.call_count(), 2);
    }

    #[test]
    fn test_counting_loader_does_not_override() {
        let loader = CountingLoader::with_vars([("A", "file")]);
        let store = InMemoryEnv::new();
        store.set("A", "process");

        loader.load_if_needed(&store).unwrap();

        assert_eq!(store.var("A").unwrap(), "process");
    }

    #[test]
    fn test_counting_loader_failing_still_counts() {
        let loader = CountingLoader::failing("nope");
        let err = loader.load_if_needed(&InMemoryEnv::new()).unwrap_err();

        assert_eq!(err.to_string(), "nope");
        assert_eq!(loader.call_count(), 1);
    }

    #[test]
    fn test_fixed_permissions() {
        let permissions = FixedPermissions::granted();
        assert_eq!(
            permissions.query(Capability::Read).unwrap(),
            PermissionState::Granted
        );

        let failing = FixedPermissions::failing("denied by policy");
        assert_eq!(
            failing.query(Capability::Read).unwrap_err().to_string(),
            "denied by policy"
        );
        assert_eq!(failing.call_count(), 1);
    }

    #[test]
    fn test_failing_env() {
        let env = FailingEnv::new("boom");
        assert_eq!(env.set_var("K", "V").unwrap_err().to_string(), "boom");
        assert_eq!(env.remove_var("K").unwrap_err().to_string(), "boom");
        assert!(matches!(env.var("K"), Err(VarError::NotUnicode(_))));
    }
}
