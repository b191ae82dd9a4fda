use trogon_std::env::ReadEnv;

use super::{read_failure, read_var};
use crate::error::Result;
use crate::gate::VersionGate;

/// Bun loads `.env` files itself before user code runs.
pub(crate) fn get<S: ReadEnv>(gate: &VersionGate, store: &S, key: &str) -> Result<Option<String>> {
    gate.check()?;
    read_var(store, key).map_err(|e| read_failure(key, e))
}
