//! Resolver for macOS, rooted at the fixed `Library` folders.
//!
//! Unlike XDG there is no environment-driven override and no fallback chain:
//! every kind resolves to exactly one directory per scope. macOS keeps no
//! separate config root, so configuration lives with the application data.

use std::path::PathBuf;

use super::with_app_segments;
use crate::env::Env;
use crate::error::Error;
use crate::expand::expand_user;
use crate::scope::{Scope, ScopeKind};

fn library_dir(scope: &Scope, env: &Env, subdir: &str) -> Result<PathBuf, Error> {
    let root = match scope.kind() {
        ScopeKind::System => PathBuf::from("/Library"),
        ScopeKind::User => expand_user("~/Library", env)?,
        ScopeKind::CustomHome(root) => root.join("Library"),
    };
    Ok(with_app_segments(root.join(subdir), scope))
}

pub(crate) fn data_dirs(scope: &Scope, env: &Env) -> Result<Vec<PathBuf>, Error> {
    Ok(vec![library_dir(scope, env, "Application Support")?])
}

pub(crate) fn config_dirs(scope: &Scope, env: &Env) -> Result<Vec<PathBuf>, Error> {
    data_dirs(scope, env)
}

pub(crate) fn cache_dir(scope: &Scope, env: &Env) -> Result<PathBuf, Error> {
    library_dir(scope, env, "Caches")
}

/// The one platform with a dedicated log root.
pub(crate) fn log_dir(scope: &Scope, env: &Env) -> Result<PathBuf, Error> {
    library_dir(scope, env, "Logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok_eq};

    use std::collections::HashMap;
    use std::path::Path;

    fn env() -> Env {
        Env::new_from(HashMap::new(), Some(PathBuf::from("/Users/test")))
    }

    fn paths(raw: &[&str]) -> Vec<PathBuf> {
        raw.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn system_scope_uses_root_library() {
        let env = env();
        let scope = Scope::new(ScopeKind::System, "foobar").unwrap();

        assert_ok_eq!(
            data_dirs(&scope, &env),
            paths(&["/Library/Application Support/foobar"])
        );
        assert_ok_eq!(
            config_dirs(&scope, &env),
            paths(&["/Library/Application Support/foobar"])
        );
        assert_ok_eq!(cache_dir(&scope, &env), Path::new("/Library/Caches/foobar"));
        assert_ok_eq!(log_dir(&scope, &env), Path::new("/Library/Logs/foobar"));
    }

    #[test]
    fn vendor_segment_precedes_app_segment() {
        let env = env();
        let scope = Scope::with_vendor(ScopeKind::System, "barcorp", "foobar").unwrap();

        assert_ok_eq!(
            data_dirs(&scope, &env),
            paths(&["/Library/Application Support/barcorp/foobar"])
        );
        assert_ok_eq!(
            cache_dir(&scope, &env),
            Path::new("/Library/Caches/barcorp/foobar")
        );
        assert_ok_eq!(
            log_dir(&scope, &env),
            Path::new("/Library/Logs/barcorp/foobar")
        );
    }

    #[test]
    fn user_scope_resolves_under_home_library() {
        let env = env();
        let scope = Scope::new(ScopeKind::User, "foobar").unwrap();

        assert_ok_eq!(
            data_dirs(&scope, &env),
            paths(&["/Users/test/Library/Application Support/foobar"])
        );
        assert_ok_eq!(
            cache_dir(&scope, &env),
            Path::new("/Users/test/Library/Caches/foobar")
        );
        assert_ok_eq!(
            log_dir(&scope, &env),
            Path::new("/Users/test/Library/Logs/foobar")
        );
    }

    #[test]
    fn custom_home_replaces_both_user_and_system_roots() {
        let env = env();
        let scope = Scope::with_custom_home("/tmp", "", "foobar").unwrap();

        assert_ok_eq!(
            data_dirs(&scope, &env),
            paths(&["/tmp/Library/Application Support/foobar"])
        );
        assert_ok_eq!(cache_dir(&scope, &env), Path::new("/tmp/Library/Caches/foobar"));
        assert_ok_eq!(log_dir(&scope, &env), Path::new("/tmp/Library/Logs/foobar"));
    }

    #[test]
    fn missing_home_fails_only_for_user_scope() {
        let env = Env::new_from(HashMap::new(), None);
        let user = Scope::new(ScopeKind::User, "foobar").unwrap();
        let system = Scope::new(ScopeKind::System, "foobar").unwrap();

        assert_err!(data_dirs(&user, &env));
        assert_ok_eq!(log_dir(&system, &env), Path::new("/Library/Logs/foobar"));
    }
}
