//! Capability queries for hosts with a permission model (Deno).

use std::fmt;
use std::io;

use trogon_std::args::ReadArgs;

/// A capability the host may or may not have granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Reading files, needed to load a `.env` file.
    Read,
}

impl Capability {
    pub fn name(self) -> &'static str {
        match self {
            Capability::Read => "read",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Answer to a permission query. Only [`PermissionState::Granted`] lets a
/// caller proceed without asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Prompt,
    Denied,
}

pub trait QueryPermission {
    fn query(&self, capability: Capability) -> io::Result<PermissionState>;
}

/// Answers from the permission flags the process was started with.
///
/// `--allow-all`/`-A` and a bare `--allow-<name>` grant, a bare
/// `--deny-<name>` denies and wins over any grant. Path-scoped flags such as
/// `--allow-read=./config` only cover part of the capability and leave it
/// at [`PermissionState::Prompt`].
pub struct ArgsPermissions<A> {
    args: A,
}

impl<A> ArgsPermissions<A> {
    pub fn new(args: A) -> Self {
        Self { args }
    }
}

impl<A: ReadArgs> QueryPermission for ArgsPermissions<A> {
    fn query(&self, capability: Capability) -> io::Result<PermissionState> {
        let allow = format!("--allow-{}", capability.name());
        let deny = format!("--deny-{}", capability.name());

        let mut state = PermissionState::Prompt;
        for arg in self.args.args() {
            if arg == deny {
                return Ok(PermissionState::Denied);
            }
            if arg == allow || arg == "--allow-all" || arg == "-A" {
                state = PermissionState::Granted;
            }
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use trogon_std::args::FixedArgs;

    use super::*;

    fn query(args: &[&str], capability: Capability) -> PermissionState {
        ArgsPermissions::new(FixedArgs::new(args.iter().copied()))
            .query(capability)
            .unwrap()
    }

    #[test]
    fn test_no_flags_prompts() {
        assert_eq!(query(&["deno", "run", "main.ts"], Capability::Read), PermissionState::Prompt);
    }

    #[test]
    fn test_bare_allow_grants() {
        assert_eq!(query(&["--allow-read"], Capability::Read), PermissionState::Granted);
        assert_eq!(query(&["--allow-env"], Capability::Read), PermissionState::Prompt);
    }

    #[test]
    fn test_allow_all_grants_everything() {
        for flag in ["--allow-all", "-A"] {
            assert_eq!(query(&[flag], Capability::Read), PermissionState::Granted);
        }
    }

    #[test]
    fn test_scoped_allow_is_partial() {
        assert_eq!(query(&["--allow-read=./config"], Capability::Read), PermissionState::Prompt);
    }

    #[test]
    fn test_deny_wins() {
        assert_eq!(
            query(&["-A", "--deny-read"], Capability::Read),
            PermissionState::Denied
        );
        assert_eq!(
            query(&["--deny-read", "--allow-read"], Capability::Read),
            PermissionState::Denied
        );
    }

    #[test]
    fn test_capability_name() {
        assert_eq!(Capability::Read.to_string(), "read");
    }
}
