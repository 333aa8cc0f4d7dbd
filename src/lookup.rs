//! Existence probing across an ordered list of candidate directories.

use std::path::PathBuf;

/// Join `filename` onto every directory, in order, and keep the paths that
/// exist on disk.
///
/// Order is preserved, nothing is deduplicated and absence is not an error: a
/// probe that fails for any reason (missing file, permission denied) simply
/// drops that candidate and the scan continues.
pub(crate) fn lookup(dirs: Vec<PathBuf>, filename: &str) -> Vec<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(filename))
        .filter(|path| path.exists())
        .collect()
}
