//! Conditional `.env` loading for hosts that do not load it themselves.

use std::env::VarError;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;
use trogon_std::env::{ReadEnv, WriteEnv};
use trogon_std::fs::{ExistsFile, ReadFile};

/// Loads a `.env` file into `store` on demand.
///
/// Implementations must be idempotent: calling this any number of times
/// leaves `store` as a single call would.
pub trait LoadEnvFile {
    fn load_if_needed<S: ReadEnv + WriteEnv>(&self, store: &S) -> io::Result<()>;
}

/// Parses the file with `dotenvy` and copies every pair into the store,
/// skipping keys the store already has.
///
/// Loads at most once; once a load has succeeded (or found no file) later
/// calls return immediately. A failed load is retried on the next call.
///
/// `Send + Sync` when `F` is, so a facade built on it can live in a
/// `static`.
pub struct DotenvLoader<F> {
    fs: F,
    path: PathBuf,
    loaded: AtomicBool,
}

impl<F> DotenvLoader<F> {
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
            loaded: AtomicBool::new(false),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }
}

impl<F: ReadFile + ExistsFile> LoadEnvFile for DotenvLoader<F> {
    fn load_if_needed<S: ReadEnv + WriteEnv>(&self, store: &S) -> io::Result<()> {
        if self.is_loaded() {
            return Ok(());
        }

        if !self.fs.exists(&self.path) {
            debug!(path = %self.path.display(), "no env file to load");
            self.loaded.store(true, Ordering::Release);
            return Ok(());
        }

        let contents = self.fs.read_to_string(&self.path)?;
        // Parse everything first so a syntax error leaves the store untouched.
        let pairs = dotenvy::from_read_iter(contents.as_bytes())
            .collect::<Result<Vec<(String, String)>, dotenvy::Error>>()
            .map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("{}: {e}", self.path.display()),
                )
            })?;

        let mut applied = 0usize;
        for (key, value) in &pairs {
            if matches!(store.var(key), Err(VarError::NotPresent)) {
                store.set_var(key, value)?;
                applied += 1;
            }
        }

        debug!(
            path = %self.path.display(),
            parsed = pairs.len(),
            applied,
            "env file loaded"
        );
        self.loaded.store(true, Ordering::Release);
        Ok(())
    }
}
