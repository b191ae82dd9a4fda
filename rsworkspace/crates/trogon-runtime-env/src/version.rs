//! Numeric `MAJOR.MINOR.PATCH` comparison of host versions.
//!
//! Hosts report versions in slightly different shapes (`v20.11.1` from
//! Node, `1.40.2` from Deno, `1.1.8` from Bun). All of them are read into a
//! [`semver::Version`]; only the numeric core takes part in comparisons.

use std::fmt;
use std::str::FromStr;

use semver::Version;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
#[error("invalid version {input:?}: {source}")]
pub struct VersionError {
    input: String,
    #[source]
    source: semver::Error,
}

/// A host-reported version.
///
/// A leading `v` is ignored and missing minor/patch components read as `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostVersion(Version);

impl HostVersion {
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let trimmed = input.trim();
        let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);
        Version::parse(&pad_core(bare))
            .map(Self)
            .map_err(|source| VersionError {
                input: input.to_string(),
                source,
            })
    }

    /// `true` if `self >= required`, comparing major, minor and patch as
    /// integers. Pre-release and build metadata are ignored.
    pub fn is_at_least(&self, required: &HostVersion) -> bool {
        self.core() >= required.core()
    }

    fn core(&self) -> (u64, u64, u64) {
        (self.0.major, self.0.minor, self.0.patch)
    }
}

impl FromStr for HostVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// `true` if `current` is at least `require`.
///
/// Inputs are expected to be well formed; a malformed one is logged and
/// answers `false`.
pub fn is_at_least(require: &str, current: &str) -> bool {
    match (HostVersion::parse(require), HostVersion::parse(current)) {
        (Ok(require), Ok(current)) => current.is_at_least(&require),
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "cannot compare versions");
            false
        }
    }
}

/// `"20"` → `"20.0.0"`, `"1.2-rc.1"` → `"1.2.0-rc.1"`.
fn pad_core(version: &str) -> String {
    let split = version.find(['-', '+']).unwrap_or(version.len());
    let (core, rest) = version.split_at(split);
    let missing = 2usize.saturating_sub(core.matches('.').count());
    let mut padded = String::with_capacity(version.len() + missing * 2);
    padded.push_str(core);
    for _ in 0..missing {
        padded.push_str(".0");
    }
    padded.push_str(rest);
    padded
}
