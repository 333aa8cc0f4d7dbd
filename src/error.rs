use thiserror::Error;

/// Errors returned by [`Scope`](crate::Scope) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// This variant indicates a caller error: an empty application name at
    /// construction, or an empty filename (or one containing a path
    /// separator) passed to a path or lookup operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// This variant indicates that a required environment signal could not be
    /// resolved: the home directory on Unix/macOS, or `%APPDATA%` /
    /// `%PROGRAMDATA%` on Windows.
    #[error("environment unavailable: {0}")]
    EnvironmentUnavailable(String),
}
