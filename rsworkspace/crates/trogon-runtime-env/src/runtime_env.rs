use tracing::debug;
use trogon_std::args::{ReadArgs, SystemArgs};
use trogon_std::env::{ReadEnv, RemoveEnv, SystemEnv, WriteEnv};
use trogon_std::fs::SystemFs;

use crate::config::{ConfigError, RuntimeEnvConfig};
use crate::error::Result;
use crate::gate::VersionGate;
use crate::handler;
use crate::loader::{DotenvLoader, LoadEnvFile};
use crate::permission::{ArgsPermissions, QueryPermission};
use crate::runtime::{HostInfo, Runtime};

/// Environment access wired to the real process.
pub type SystemRuntimeEnv =
    RuntimeEnv<SystemEnv, DotenvLoader<SystemFs>, ArgsPermissions<SystemArgs>, SystemArgs>;

/// `get`/`set`/`delete` over the environment of whichever host this
/// process runs on.
///
/// The host is fixed at construction and the version gate evaluated once;
/// neither is refreshed for the life of the value. Every operation returns
/// a [`Result`](crate::Result) and never panics on collaborator failure.
///
/// - `S`: the host's environment table.
/// - `L`: `.env` loader, used on Node (without `--env-file=`) and Deno.
/// - `P`: permission queries, used on Deno.
/// - `A`: startup arguments, inspected on Node.
pub struct RuntimeEnv<S, L, P, A> {
    gate: VersionGate,
    store: S,
    loader: L,
    permissions: P,
    args: A,
}

impl<S, L, P, A> RuntimeEnv<S, L, P, A> {
    pub fn new(host: HostInfo, store: S, loader: L, permissions: P, args: A) -> Self {
        Self {
            gate: VersionGate::new(host),
            store,
            loader,
            permissions,
            args,
        }
    }

    pub fn runtime(&self) -> Runtime {
        self.gate.host().runtime()
    }

    pub fn host(&self) -> &HostInfo {
        self.gate.host()
    }

    pub fn gate(&self) -> &VersionGate {
        &self.gate
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

impl<S, L, P, A> RuntimeEnv<S, L, P, A>
where
    S: ReadEnv + WriteEnv + RemoveEnv,
    L: LoadEnvFile,
    P: QueryPermission,
    A: ReadArgs,
{
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(runtime = %self.runtime(), key, "set");
        match self.runtime() {
            Runtime::Node | Runtime::Deno | Runtime::Bun => {
                handler::set(&self.gate, &self.store, key, value)
            }
        }
    }

    /// `Ok(None)` when `key` is not set; `Ok(Some(""))` when it is set to
    /// the empty string.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        debug!(runtime = %self.runtime(), key, "get");
        match self.runtime() {
            Runtime::Node => {
                handler::node::get(&self.gate, &self.store, &self.loader, &self.args, key)
            }
            Runtime::Deno => {
                handler::deno::get(&self.gate, &self.store, &self.loader, &self.permissions, key)
            }
            Runtime::Bun => handler::bun::get(&self.gate, &self.store, key),
        }
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        debug!(runtime = %self.runtime(), key, "delete");
        match self.runtime() {
            Runtime::Node | Runtime::Deno | Runtime::Bun => {
                handler::delete(&self.gate, &self.store, key)
            }
        }
    }
}

impl SystemRuntimeEnv {
    /// Resolves the host from the process environment (see
    /// [`RuntimeEnvConfig::from_env`]) and wires the real collaborators.
    pub fn system() -> std::result::Result<Self, ConfigError> {
        let config = RuntimeEnvConfig::from_env(&SystemEnv)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: RuntimeEnvConfig) -> Self {
        let loader = DotenvLoader::new(SystemFs, config.env_file());
        Self::new(
            config.host().clone(),
            SystemEnv,
            loader,
            ArgsPermissions::new(SystemArgs),
            SystemArgs,
        )
    }
}
