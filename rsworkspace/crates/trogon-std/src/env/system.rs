use std::env;
use std::io;

use super::{ReadEnv, RemoveEnv, WriteEnv};

/// Zero-sized type — delegates to `std::env`.
///
/// `std::env::set_var` and `std::env::remove_var` panic on malformed keys
/// and values; those inputs are rejected here with
/// [`io::ErrorKind::InvalidInput`] instead.
///
/// # Safety contract
///
/// Writes mutate the process-wide environment table. Rust's own
/// `std::env` accessors are synchronized, but C code reading the
/// environment concurrently (through `getenv`) is not. Only write while no
/// foreign thread reads the environment.
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

impl WriteEnv for SystemEnv {
    fn set_var(&self, key: &str, value: &str) -> io::Result<()> {
        validate_key(key)?;
        if value.contains('\0') {
            return Err(invalid_input(format!(
                "value of environment variable {key:?} contains a NUL byte"
            )));
        }
        // SAFETY: see the safety contract on `SystemEnv`.
        unsafe { env::set_var(key, value) };
        Ok(())
    }
}

impl RemoveEnv for SystemEnv {
    fn remove_var(&self, key: &str) -> io::Result<()> {
        validate_key(key)?;
        // SAFETY: see the safety contract on `SystemEnv`.
        unsafe { env::remove_var(key) };
        Ok(())
    }
}

fn validate_key(key: &str) -> io::Result<()> {
    if key.is_empty() {
        return Err(invalid_input("environment variable name is empty".to_string()));
    }
    if key.contains('=') || key.contains('\0') {
        return Err(invalid_input(format!(
            "invalid environment variable name {key:?}"
        )));
    }
    Ok(())
}

fn invalid_input(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}
