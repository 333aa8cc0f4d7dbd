//! Resolver for Windows, rooted at the roaming and machine-wide application
//! data folders.
//!
//! Data and config share one root per scope: `%APPDATA%` for the user,
//! `%PROGRAMDATA%` system-wide. Cache and log directories are `Cache` and
//! `Logs` folders beneath the per-application data directory, so the shape
//! mirrors macOS: single roots, no fallback chain.

use std::path::PathBuf;

use super::with_app_segments;
use crate::env::Env;
use crate::error::Error;
use crate::scope::{Scope, ScopeKind};

fn required_var(env: &Env, key: &str) -> Result<PathBuf, Error> {
    env.get_non_empty(key)
        .map(PathBuf::from)
        .ok_or_else(|| Error::EnvironmentUnavailable(format!("%{key}% is not set")))
}

fn app_data_dir(scope: &Scope, env: &Env) -> Result<PathBuf, Error> {
    let root = match scope.kind() {
        ScopeKind::User => required_var(env, "APPDATA")?,
        ScopeKind::System => required_var(env, "PROGRAMDATA")?,
        ScopeKind::CustomHome(root) => root.clone(),
    };
    Ok(with_app_segments(root, scope))
}

pub(crate) fn data_dirs(scope: &Scope, env: &Env) -> Result<Vec<PathBuf>, Error> {
    Ok(vec![app_data_dir(scope, env)?])
}

pub(crate) fn config_dirs(scope: &Scope, env: &Env) -> Result<Vec<PathBuf>, Error> {
    data_dirs(scope, env)
}

pub(crate) fn cache_dir(scope: &Scope, env: &Env) -> Result<PathBuf, Error> {
    Ok(app_data_dir(scope, env)?.join("Cache"))
}

pub(crate) fn log_dir(scope: &Scope, env: &Env) -> Result<PathBuf, Error> {
    Ok(app_data_dir(scope, env)?.join("Logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok_eq};

    use std::collections::HashMap;
    use std::ffi::OsString;
    use std::path::Path;

    // Expected values are built with `join` so the assertions hold with any
    // host separator.
    fn env_of(pairs: &[(&str, &str)]) -> Env {
        let map = pairs
            .iter()
            .map(|(k, v)| (OsString::from(k), OsString::from(v)))
            .collect();
        Env::new_from(map, None)
    }

    #[test]
    fn user_scope_resolves_under_appdata() {
        let env = env_of(&[("APPDATA", "/users/test/roaming")]);
        let scope = Scope::new(ScopeKind::User, "foobar").unwrap();
        let root = Path::new("/users/test/roaming").join("foobar");

        assert_ok_eq!(data_dirs(&scope, &env), vec![root.clone()]);
        assert_ok_eq!(config_dirs(&scope, &env), vec![root.clone()]);
        assert_ok_eq!(cache_dir(&scope, &env), root.join("Cache"));
        assert_ok_eq!(log_dir(&scope, &env), root.join("Logs"));
    }

    #[test]
    fn system_scope_resolves_under_programdata() {
        let env = env_of(&[("PROGRAMDATA", "/programdata")]);
        let scope = Scope::with_vendor(ScopeKind::System, "barcorp", "foobar").unwrap();
        let root = Path::new("/programdata").join("barcorp").join("foobar");

        assert_ok_eq!(data_dirs(&scope, &env), vec![root.clone()]);
        assert_ok_eq!(cache_dir(&scope, &env), root.join("Cache"));
        assert_ok_eq!(log_dir(&scope, &env), root.join("Logs"));
    }

    #[test]
    fn custom_home_needs_no_environment() {
        let env = env_of(&[]);
        let scope = Scope::with_custom_home("/sandbox", "", "foobar").unwrap();
        let root = Path::new("/sandbox").join("foobar");

        assert_ok_eq!(data_dirs(&scope, &env), vec![root.clone()]);
        assert_ok_eq!(cache_dir(&scope, &env), root.join("Cache"));
        assert_ok_eq!(log_dir(&scope, &env), root.join("Logs"));
    }

    #[test]
    fn missing_variable_is_reported() {
        let env = env_of(&[]);
        let user = Scope::new(ScopeKind::User, "foobar").unwrap();
        let system = Scope::new(ScopeKind::System, "foobar").unwrap();

        assert_err!(data_dirs(&user, &env));
        assert_err!(cache_dir(&system, &env));
        assert_eq!(
            data_dirs(&user, &env).unwrap_err(),
            Error::EnvironmentUnavailable("%APPDATA% is not set".to_owned())
        );
    }
}
