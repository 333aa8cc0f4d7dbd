//! Resolver for Unix platforms following the XDG Base Directory
//! Specification (<https://specifications.freedesktop.org/basedir-spec/>).
//!
//! Environment overrides apply only when set to a non-empty value; the
//! `*_DIRS` variables are colon-separated lists. User-scope lists put the
//! user-private root first, followed by the full system fallback chain.

use std::path::PathBuf;

use super::with_app_segments;
use crate::env::Env;
use crate::error::Error;
use crate::expand::expand_user;
use crate::scope::{Scope, ScopeKind};

const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";
const DEFAULT_CONFIG_DIRS: &str = "/etc/xdg";

// Split entries are expanded as well; a `~/`-prefixed list entry must never
// escape with the marker intact.
fn split_dirs(list: &str, env: &Env) -> Result<Vec<PathBuf>, Error> {
    list.split(':')
        .filter(|entry| !entry.is_empty())
        .map(|entry| expand_user(entry, env))
        .collect()
}

fn user_root(env: &Env, key: &str, default: &str) -> Result<PathBuf, Error> {
    match env.get_non_empty(key) {
        Some(value) => expand_user(value, env),
        None => expand_user(default, env),
    }
}

fn system_roots(env: &Env, key: &str, default: &str) -> Result<Vec<PathBuf>, Error> {
    let roots = split_dirs(env.get_non_empty(key).unwrap_or(default), env)?;
    // A list of nothing but empty entries does not override the default.
    if roots.is_empty() {
        split_dirs(default, env)
    } else {
        Ok(roots)
    }
}

// `/etc` is always consulted last, even when `$XDG_CONFIG_DIRS` overrides
// `/etc/xdg`.
fn system_config_roots(env: &Env) -> Result<Vec<PathBuf>, Error> {
    let mut roots = system_roots(env, "XDG_CONFIG_DIRS", DEFAULT_CONFIG_DIRS)?;
    roots.push(PathBuf::from("/etc"));
    Ok(roots)
}

pub(crate) fn data_dirs(scope: &Scope, env: &Env) -> Result<Vec<PathBuf>, Error> {
    let roots = match scope.kind() {
        ScopeKind::System => system_roots(env, "XDG_DATA_DIRS", DEFAULT_DATA_DIRS)?,
        ScopeKind::User => {
            let mut roots = vec![user_root(env, "XDG_DATA_HOME", "~/.local/share")?];
            roots.extend(system_roots(env, "XDG_DATA_DIRS", DEFAULT_DATA_DIRS)?);
            roots
        }
        ScopeKind::CustomHome(root) => vec![root.join(".local/share")],
    };
    Ok(roots
        .into_iter()
        .map(|root| with_app_segments(root, scope))
        .collect())
}

pub(crate) fn config_dirs(scope: &Scope, env: &Env) -> Result<Vec<PathBuf>, Error> {
    let roots = match scope.kind() {
        ScopeKind::System => system_config_roots(env)?,
        ScopeKind::User => {
            let mut roots = vec![user_root(env, "XDG_CONFIG_HOME", "~/.config")?];
            roots.extend(system_config_roots(env)?);
            roots
        }
        ScopeKind::CustomHome(root) => vec![root.join(".config")],
    };
    Ok(roots
        .into_iter()
        .map(|root| with_app_segments(root, scope))
        .collect())
}

pub(crate) fn cache_dir(scope: &Scope, env: &Env) -> Result<PathBuf, Error> {
    let root = match scope.kind() {
        ScopeKind::System => PathBuf::from("/var/cache"),
        ScopeKind::User => user_root(env, "XDG_CACHE_HOME", "~/.cache")?,
        ScopeKind::CustomHome(root) => root.join(".cache"),
    };
    Ok(with_app_segments(root, scope))
}

/// XDG defines no log root. User-scope logs live in the primary data
/// directory; system-scope logs go under `/var/log`.
pub(crate) fn log_dir(scope: &Scope, env: &Env) -> Result<PathBuf, Error> {
    match scope.kind() {
        ScopeKind::System => Ok(with_app_segments(PathBuf::from("/var/log"), scope)),
        ScopeKind::User | ScopeKind::CustomHome(_) => {
            let mut dirs = data_dirs(scope, env)?;
            // User and custom-home data lists always start with the
            // home-relative root.
            Ok(dirs.remove(0))
        }
    }
}
