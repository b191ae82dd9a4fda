//! Which host runtime this process runs on.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The supported hosts. Closed set: every dispatch over it is an
/// exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runtime {
    Node,
    Deno,
    Bun,
}

impl Runtime {
    pub const ALL: [Runtime; 3] = [Runtime::Node, Runtime::Deno, Runtime::Bun];

    /// The identifier the runtime-detection primitive reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Runtime::Node => "node",
            Runtime::Deno => "deno",
            Runtime::Bun => "bun",
        }
    }

    /// Capitalized identifier; Node carries a `.js` suffix so it reads as
    /// the product name rather than the ecosystem's.
    pub fn display_name(self) -> String {
        let name = capitalize(self.as_str());
        match self {
            Runtime::Node => name + ".js",
            Runtime::Deno | Runtime::Bun => name,
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown runtime {0:?}, expected one of: node, deno, bun")]
pub struct UnknownRuntime(String);

impl FromStr for Runtime {
    type Err = UnknownRuntime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Runtime::ALL
            .into_iter()
            .find(|runtime| runtime.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownRuntime(s.to_string()))
    }
}

/// Runtime identity plus the version it reports. Resolved once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    runtime: Runtime,
    version: String,
}

impl HostInfo {
    pub fn new(runtime: Runtime, version: impl Into<String>) -> Self {
        Self {
            runtime,
            version: version.into(),
        }
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for HostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.runtime.display_name(), self.version)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Runtime::Node.display_name(), "Node.js");
        assert_eq!(Runtime::Deno.display_name(), "Deno");
        assert_eq!(Runtime::Bun.display_name(), "Bun");
    }

    #[test]
    fn test_parse_round_trips_identifier() {
        for runtime in Runtime::ALL {
            assert_eq!(runtime.as_str().parse::<Runtime>().unwrap(), runtime);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(" Deno\n".parse::<Runtime>().unwrap(), Runtime::Deno);
        assert_eq!("BUN".parse::<Runtime>().unwrap(), Runtime::Bun);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "workerd".parse::<Runtime>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown runtime \"workerd\", expected one of: node, deno, bun"
        );
        assert!("".parse::<Runtime>().is_err());
    }

    #[test]
    fn test_host_info_display() {
        let host = HostInfo::new(Runtime::Node, "v20.11.1");
        assert_eq!(host.to_string(), "Node.js v20.11.1");
        assert_eq!(host.runtime(), Runtime::Node);
        assert_eq!(host.version(), "v20.11.1");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("deno"), "Deno");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");
    }
}
