//! Home directory expansion.

use std::path::PathBuf;

use crate::env::Env;
use crate::error::Error;

/// Expand a leading `~` into the home directory carried by `env`.
///
/// Only the bare `~` and the `~/...` forms are expanded; everything else,
/// including `~user/...`, is returned unchanged (same contract as
/// [`shellexpand::tilde`]). Expansion is idempotent: a path without a leading
/// marker always passes through as-is, without consulting `env`.
///
/// # Returns
///
/// [`Error::EnvironmentUnavailable`] if and only if the input requires
/// expansion and `env` has no home directory (or the home directory is not an
/// UTF-8 path).
pub fn expand_user(path: &str, env: &Env) -> Result<PathBuf, Error> {
    if path != "~" && !path.starts_with("~/") {
        return Ok(PathBuf::from(path));
    }
    let home = env.home().ok_or_else(|| {
        Error::EnvironmentUnavailable("cannot resolve the home directory".to_owned())
    })?;
    let Some(home) = home.to_str() else {
        return Err(Error::EnvironmentUnavailable(
            "home directory is not an UTF-8 path".to_owned(),
        ));
    };
    let expanded = shellexpand::tilde_with_context(path, || Some(home));
    Ok(PathBuf::from(expanded.into_owned()))
}
