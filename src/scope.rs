//! Application scopes and their directory queries.

use std::path::PathBuf;

use crate::env::Env;
use crate::error::Error;
use crate::lookup::lookup;
use crate::platform;

/// Ownership of the directories a [`Scope`] resolves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// User-specific paths, the default for most applications.
    User,
    /// System-wide paths, for data shared between users.
    System,
    /// Paths rooted at an explicit directory instead of the real home, for
    /// tests and sandboxes. The root replaces user and system roots alike:
    /// every kind resolves to a single user-shaped path beneath it.
    CustomHome(PathBuf),
}

/// One (application, vendor, scope kind) resolution context.
///
/// A `Scope` is immutable; every query is a pure function of the scope and
/// the environment at call time, re-read on each call. No query creates a
/// directory or caches a result.
///
/// ```rust,no_run
/// # use appscope::{Scope, ScopeKind};
/// # fn main() -> Result<(), appscope::Error> {
/// let scope = Scope::new(ScopeKind::User, "myapp")?;
/// let _config = scope.config_dir()?; // ~/.config/myapp on XDG Unix
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    kind: ScopeKind,
    vendor: Option<String>,
    app: String,
}

impl Scope {
    /// Create a scope for `app`.
    ///
    /// # Returns
    /// [`Error::InvalidArgument`] if and only if `app` is empty.
    pub fn new(kind: ScopeKind, app: impl Into<String>) -> Result<Self, Error> {
        Self::with_vendor(kind, "", app)
    }

    /// Create a scope for `app` owned by `vendor`.
    ///
    /// The vendor becomes a path segment between the platform root and the
    /// application segment. An empty `vendor` means no vendor at all.
    pub fn with_vendor(
        kind: ScopeKind,
        vendor: impl Into<String>,
        app: impl Into<String>,
    ) -> Result<Self, Error> {
        let app = app.into();
        if app.is_empty() {
            return Err(Error::InvalidArgument(
                "application name must not be empty".to_owned(),
            ));
        }
        let vendor = Some(vendor.into()).filter(|vendor| !vendor.is_empty());
        Ok(Self { kind, vendor, app })
    }

    /// Create a [`ScopeKind::CustomHome`] scope resolving everything beneath
    /// `root` instead of the real home directory.
    pub fn with_custom_home(
        root: impl Into<PathBuf>,
        vendor: impl Into<String>,
        app: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::with_vendor(ScopeKind::CustomHome(root.into()), vendor, app)
    }

    pub fn kind(&self) -> &ScopeKind {
        &self.kind
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    /// All directories where configuration files for this scope may live, in
    /// precedence order: the preferred writable directory first, the most
    /// general system-wide fallback last.
    pub fn config_dirs(&self) -> Result<Vec<PathBuf>, Error> {
        platform::active::config_dirs(self, &Env::new())
    }

    /// All directories where application data for this scope may live, in
    /// precedence order.
    pub fn data_dirs(&self) -> Result<Vec<PathBuf>, Error> {
        platform::active::data_dirs(self, &Env::new())
    }

    /// The preferred directory for writing configuration; the head of
    /// [`Scope::config_dirs`].
    pub fn config_dir(&self) -> Result<PathBuf, Error> {
        first(self.config_dirs()?)
    }

    /// The preferred directory for writing application data; the head of
    /// [`Scope::data_dirs`].
    pub fn data_dir(&self) -> Result<PathBuf, Error> {
        first(self.data_dirs()?)
    }

    /// The cache directory for this scope.
    pub fn cache_dir(&self) -> Result<PathBuf, Error> {
        platform::active::cache_dir(self, &Env::new())
    }

    /// The log directory for this scope, derived per platform convention:
    /// macOS and Windows keep dedicated log folders, XDG Unix logs next to
    /// the data (system scope under `/var/log`).
    pub fn log_dir(&self) -> Result<PathBuf, Error> {
        platform::active::log_dir(self, &Env::new())
    }

    /// [`Scope::config_dir`] joined with `filename`.
    ///
    /// # Returns
    /// [`Error::InvalidArgument`] if `filename` is empty or contains a path
    /// separator; the name is rejected, never sanitized.
    pub fn config_path(&self, filename: &str) -> Result<PathBuf, Error> {
        validate_filename(filename)?;
        Ok(self.config_dir()?.join(filename))
    }

    /// [`Scope::data_dir`] joined with `filename`.
    pub fn data_path(&self, filename: &str) -> Result<PathBuf, Error> {
        validate_filename(filename)?;
        Ok(self.data_dir()?.join(filename))
    }

    /// [`Scope::log_dir`] joined with `filename`.
    pub fn log_path(&self, filename: &str) -> Result<PathBuf, Error> {
        validate_filename(filename)?;
        Ok(self.log_dir()?.join(filename))
    }

    /// Find existing copies of `filename` across [`Scope::config_dirs`],
    /// probing in precedence order.
    ///
    /// An empty result means no candidate exists and is not an error.
    pub fn lookup_config(&self, filename: &str) -> Result<Vec<PathBuf>, Error> {
        validate_filename(filename)?;
        Ok(lookup(self.config_dirs()?, filename))
    }

    /// Find existing copies of `filename` across [`Scope::data_dirs`],
    /// probing in precedence order.
    pub fn lookup_data_file(&self, filename: &str) -> Result<Vec<PathBuf>, Error> {
        validate_filename(filename)?;
        Ok(lookup(self.data_dirs()?, filename))
    }
}

fn first(mut dirs: Vec<PathBuf>) -> Result<PathBuf, Error> {
    if dirs.is_empty() {
        return Err(Error::EnvironmentUnavailable(
            "no candidate directories resolved".to_owned(),
        ));
    }
    Ok(dirs.remove(0))
}

fn validate_filename(filename: &str) -> Result<(), Error> {
    if filename.is_empty() {
        return Err(Error::InvalidArgument(
            "filename must not be empty".to_owned(),
        ));
    }
    if filename.chars().any(std::path::is_separator) {
        return Err(Error::InvalidArgument(format!(
            "filename {filename:?} must not contain path separators"
        )));
    }
    Ok(())
}
