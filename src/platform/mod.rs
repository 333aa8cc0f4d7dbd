//! Per-platform directory resolvers.
//!
//! Each module maps `(Scope, Env)` to ordered candidate directories for one
//! platform family. Exactly one of them is re-exported as [`active`] for the
//! compilation target; all three compile on every target, since they are pure
//! path computations over an injected environment.

pub(crate) mod macos;
pub(crate) mod windows;
pub(crate) mod xdg;

#[cfg(not(any(target_os = "macos", windows)))]
pub(crate) use xdg as active;

#[cfg(target_os = "macos")]
pub(crate) use macos as active;

#[cfg(windows)]
pub(crate) use windows as active;

use std::path::PathBuf;

use crate::scope::Scope;

/// Append the vendor segment (when present) and the application segment to a
/// resolved platform root.
pub(crate) fn with_app_segments(mut root: PathBuf, scope: &Scope) -> PathBuf {
    if let Some(vendor) = scope.vendor() {
        root.push(vendor);
    }
    root.push(scope.app());
    root
}
