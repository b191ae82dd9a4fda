use tracing::{debug, warn};
use trogon_std::args::ReadArgs;
use trogon_std::env::{ReadEnv, WriteEnv};

use super::{read_failure, read_var};
use crate::error::{Error, Result};
use crate::gate::{Profile, VersionGate};
use crate::loader::LoadEnvFile;

pub(crate) const ENV_FILE_FLAG: &str = "--env-file=";

/// With `--env-file=` on the command line Node has already populated the
/// store, so the loader is skipped. A read that fails in that mode is
/// reported as the host lacking `--env-file` support.
pub(crate) fn get<S, L, A>(
    gate: &VersionGate,
    store: &S,
    loader: &L,
    args: &A,
    key: &str,
) -> Result<Option<String>>
where
    S: ReadEnv + WriteEnv,
    L: LoadEnvFile,
    A: ReadArgs,
{
    gate.check()?;

    if args.any_starts_with(ENV_FILE_FLAG) {
        debug!(key, "started with {ENV_FILE_FLAG}, reading without loader");
        return read_var(store, key).map_err(|e| {
            warn!(key, error = %e, "read failed under {ENV_FILE_FLAG}");
            gate.deficiency(Profile::EnvFileFlag)
        });
    }

    loader.load_if_needed(store).map_err(|e| {
        warn!(error = %e, "failed to load env file");
        Error::failure(e)
    })?;
    read_var(store, key).map_err(|e| read_failure(key, e))
}

#[cfg(test)]
mod tests {
    use trogon_std::args::FixedArgs;
    use trogon_std::env::InMemoryEnv;

    use super::*;
    use crate::mocks::{CountingLoader, FailingEnv};
    use crate::runtime::{HostInfo, Runtime};

    fn gate(version: &str) -> VersionGate {
        VersionGate::new(HostInfo::new(Runtime::Node, version))
    }

    #[test]
    fn test_flag_skips_loader() {
        let store = InMemoryEnv::new();
        store.set("KEY", "from-flag");
        let loader = CountingLoader::new();
        let args = FixedArgs::new(["node", "--env-file=foo", "main.js"]);

        let value = get(&gate("v20.11.1"), &store, &loader, &args, "KEY").unwrap();

        assert_eq!(value.as_deref(), Some("from-flag"));
        assert_eq!(loader.call_count(), 0);
    }

    #[test]
    fn test_without_flag_loads_once_per_call() {
        let store = InMemoryEnv::new();
        let loader = CountingLoader::with_vars([("KEY", "from-file")]);
        let args = FixedArgs::new(["node", "main.js"]);

        for expected_calls in 1..=3 {
            let value = get(&gate("v20.11.1"), &store, &loader, &args, "KEY").unwrap();
            assert_eq!(value.as_deref(), Some("from-file"));
            assert_eq!(loader.call_count(), expected_calls);
        }
    }

    #[test]
    fn test_store_error_under_flag_is_deficiency() {
        let loader = CountingLoader::new();
        let args = FixedArgs::new(["node", "--env-file=.env"]);

        let err = get(&gate("v18.19.0"), &FailingEnv::new("boom"), &loader, &args, "KEY")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Node.js 20.6.0 or later is required, but v18.19.0 is running"
        );
    }

    #[test]
    fn test_outdated_node_with_flag_reports_generic_minimum() {
        let loader = CountingLoader::new();
        let args = FixedArgs::new(["node", "--env-file=.env"]);

        // A read from this store would surface as the 20.6.0 deficiency.
        let err = get(&gate("v16.20.2"), &FailingEnv::new("boom"), &loader, &args, "KEY")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Node.js 18.0.0 or later is required, but v16.20.2 is running"
        );
        assert_eq!(loader.call_count(), 0);
    }

    #[test]
    fn test_store_error_without_flag_is_failure() {
        let loader = CountingLoader::new();
        let args = FixedArgs::new(["node"]);

        let err = get(&gate("v20.11.1"), &FailingEnv::new("boom"), &loader, &args, "KEY")
            .unwrap_err();

        assert!(matches!(err, Error::Failure(_)));
    }

    #[test]
    fn test_loader_error_is_failure() {
        let loader = CountingLoader::failing("unreadable .env");
        let args = FixedArgs::new(["node"]);

        let err = get(&gate("v20.11.1"), &InMemoryEnv::new(), &loader, &args, "KEY").unwrap_err();

        assert_eq!(err.to_string(), "unreadable .env");
    }

    #[test]
    fn test_gate_runs_before_loader() {
        let loader = CountingLoader::new();
        let args = FixedArgs::new(["node"]);

        let err = get(&gate("v16.20.2"), &InMemoryEnv::new(), &loader, &args, "KEY").unwrap_err();

        assert!(err.is_version_deficiency());
        assert_eq!(loader.call_count(), 0);
    }
}
