//! Environment snapshot used by every path resolution.
//!
//! A [`Scope`](crate::Scope) method takes a fresh snapshot on each call, so
//! results always reflect the current process environment. Tests construct an
//! [`Env`] from an explicit variable map and home directory instead of
//! mutating the real environment.

use std::collections::HashMap;
use std::env::home_dir;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Snapshot of the process environment plus the resolved home directory.
///
/// Variable lookup is safe to use on Windows: its environmental variables
/// are case-insensitive.
#[derive(Debug, Clone)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,

    home: Option<PathBuf>,
}

/// Errors encountered when getting environmental variable.
#[derive(Debug, Clone, Error)]
pub enum EnvStrError {
    /// This variant indicates, that variable `Missing.0` is missing.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// This variant indicates, that variable `$NonUTF8.0` is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),
}

impl Env {
    /// Snapshot [`std::env::vars_os`] and [`std::env::home_dir`].
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect(), home_dir())
    }

    /// Create new [`Env`] from explicit variables and home directory.
    ///
    /// `home` stands in for the OS home-directory accessor; pass [`None`] to
    /// model a process with no resolvable home.
    pub fn new_from(env: HashMap<OsString, OsString>, home: Option<PathBuf>) -> Self {
        Self {
            normalised_keys: Env::normalize_map(env.clone()),
            keys: env,
            home,
        }
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    fn normalize_map(keys: HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.into_iter()
            .map(|(key, value)| (Env::normalize_key(key), value))
            .collect()
    }

    /// The home directory captured by this snapshot, if any.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates missing key, `Some`: existing key.
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None => {
                if cfg!(target_os = "windows") {
                    self.normalised_keys
                        .get(&Env::normalize_key(key))
                        .map(|x| x.as_ref())
                } else {
                    None
                }
            }
        }
    }

    /// Get environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Returns
    /// `Result<&str, EnvStrError>`. `Ok` variant indicates existing UTF-8
    /// variable, `Err` indicates some kind of error. See [`EnvStrError`] for
    /// details.
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvStrError::NonUTF8(key.to_os_string()))
    }

    /// Get `key` only when it is set to a non-empty UTF-8 value.
    ///
    /// A variable exported as an empty string does not override anything, so
    /// resolvers treat it the same as an unset one.
    pub fn get_non_empty(&self, key: impl AsRef<OsStr>) -> Option<&str> {
        match self.get(key) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
