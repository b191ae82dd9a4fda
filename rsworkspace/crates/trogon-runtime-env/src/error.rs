//! Error types for trogon-runtime-env

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The two ways an environment operation can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The host is older than the operation needs. Raised before any
    /// collaborator is called, so nothing has changed.
    #[error("{runtime} {required} or later is required, but {current} is running")]
    VersionDeficiency {
        runtime: String,
        required: String,
        current: String,
    },

    /// A collaborator (store, loader, permission query) failed. Displays
    /// the collaborator's message unchanged.
    #[error("{0}")]
    Failure(#[source] BoxError),
}

impl Error {
    pub fn failure(err: impl Into<BoxError>) -> Self {
        Self::Failure(err.into())
    }

    pub fn is_version_deficiency(&self) -> bool {
        matches!(self, Self::VersionDeficiency { .. })
    }
}
