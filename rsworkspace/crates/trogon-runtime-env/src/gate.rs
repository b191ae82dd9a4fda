//! Minimum-version preconditions, evaluated once per host.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::runtime::{HostInfo, Runtime};
use crate::version;

/// Which set of minimum versions applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Every operation on every host.
    Generic,
    /// Reading on Node when the process was started with `--env-file=`.
    /// Hosts other than Node have no such flag and fall back to
    /// [`Profile::Generic`].
    EnvFileFlag,
}

impl Profile {
    /// Minimum version `runtime` must report under this profile.
    pub fn required(self, runtime: Runtime) -> &'static str {
        match (self, runtime) {
            (Profile::EnvFileFlag, Runtime::Node) => "20.6.0",
            (_, Runtime::Node) => "18.0.0",
            // `Deno.permissions.querySync`
            (_, Runtime::Deno) => "1.30.0",
            (_, Runtime::Bun) => "1.0.0",
        }
    }
}

/// The generic profile is compared once at construction; the host cannot
/// change within a process, so the answer is never recomputed. The
/// env-file profile is only consulted to build its deficiency and is
/// compared on demand.
#[derive(Debug, Clone)]
pub struct VersionGate {
    host: HostInfo,
    generic: bool,
}

impl VersionGate {
    pub fn new(host: HostInfo) -> Self {
        let generic = satisfies(&host, Profile::Generic);
        debug!(
            runtime = %host.runtime(),
            version = host.version(),
            generic,
            "version gate evaluated"
        );
        Self { host, generic }
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    pub fn is_satisfied(&self, profile: Profile) -> bool {
        match profile {
            Profile::Generic => self.generic,
            Profile::EnvFileFlag => satisfies(&self.host, profile),
        }
    }

    /// Generic profile check run before every operation.
    pub fn check(&self) -> Result<()> {
        self.check_profile(Profile::Generic)
    }

    pub fn check_profile(&self, profile: Profile) -> Result<()> {
        if self.is_satisfied(profile) {
            return Ok(());
        }
        let err = self.deficiency(profile);
        warn!(error = %err, "host version below minimum");
        Err(err)
    }

    /// The error reported when `profile` is not met, whether or not it is.
    pub fn deficiency(&self, profile: Profile) -> Error {
        Error::VersionDeficiency {
            runtime: self.host.runtime().display_name(),
            required: profile.required(self.host.runtime()).to_string(),
            current: self.host.version().to_string(),
        }
    }
}

fn satisfies(host: &HostInfo, profile: Profile) -> bool {
    version::is_at_least(profile.required(host.runtime()), host.version())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(runtime: Runtime, version: &str) -> VersionGate {
        VersionGate::new(HostInfo::new(runtime, version))
    }

    #[test]
    fn test_generic_profile_passes_at_minimum() {
        for runtime in Runtime::ALL {
            let minimum = Profile::Generic.required(runtime);
            assert!(gate(runtime, minimum).check().is_ok(), "{runtime}");
        }
    }

    #[test]
    fn test_generic_profile_fails_below_minimum() {
        let err = gate(Runtime::Deno, "1.29.4").check().unwrap_err();
        match err {
            Error::VersionDeficiency {
                runtime,
                required,
                current,
            } => {
                assert_eq!(runtime, "Deno");
                assert_eq!(required, "1.30.0");
                assert_eq!(current, "1.29.4");
            }
            other => panic!("expected VersionDeficiency, got {other:?}"),
        }
    }

    #[test]
    fn test_env_file_profile_is_stricter_on_node() {
        let gate = gate(Runtime::Node, "v18.19.0");

        assert!(gate.check().is_ok());
        assert!(!gate.is_satisfied(Profile::EnvFileFlag));
        let err = gate.check_profile(Profile::EnvFileFlag).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Node.js 20.6.0 or later is required, but v18.19.0 is running"
        );
    }

    #[test]
    fn test_env_file_profile_falls_back_to_generic_off_node() {
        assert_eq!(
            Profile::EnvFileFlag.required(Runtime::Bun),
            Profile::Generic.required(Runtime::Bun)
        );
        assert!(gate(Runtime::Bun, "1.1.0").is_satisfied(Profile::EnvFileFlag));
    }

    #[test]
    fn test_unparseable_host_version_fails_closed() {
        let gate = gate(Runtime::Bun, "unknown");
        assert!(gate.check().unwrap_err().is_version_deficiency());
    }

    #[test]
    fn test_deficiency_is_available_when_satisfied() {
        let gate = gate(Runtime::Node, "22.0.0");
        assert!(gate.check_profile(Profile::EnvFileFlag).is_ok());
        assert!(gate.deficiency(Profile::EnvFileFlag).is_version_deficiency());
    }
}
