use tracing::{debug, warn};
use trogon_std::env::{ReadEnv, WriteEnv};

use super::{read_failure, read_var};
use crate::error::{Error, Result};
use crate::gate::VersionGate;
use crate::loader::LoadEnvFile;
use crate::permission::{Capability, PermissionState, QueryPermission};

/// Loading the `.env` file needs read permission. Without it the store is
/// read as is, so variables that only exist in the file read as absent.
pub(crate) fn get<S, L, P>(
    gate: &VersionGate,
    store: &S,
    loader: &L,
    permissions: &P,
    key: &str,
) -> Result<Option<String>>
where
    S: ReadEnv + WriteEnv,
    L: LoadEnvFile,
    P: QueryPermission,
{
    gate.check()?;

    let state = permissions.query(Capability::Read).map_err(|e| {
        warn!(error = %e, "read permission query failed");
        Error::failure(e)
    })?;

    if state == PermissionState::Granted {
        loader.load_if_needed(store).map_err(|e| {
            warn!(error = %e, "failed to load env file");
            Error::failure(e)
        })?;
    } else {
        debug!(key, ?state, "read permission not granted, skipping env file");
    }

    read_var(store, key).map_err(|e| read_failure(key, e))
}
