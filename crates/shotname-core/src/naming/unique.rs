//! Collision-free target path selection.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Returns a path in `dir` named `{base}{ext}` that does not exist yet, or
/// the first free `{base}-2{ext}`, `{base}-3{ext}`, … otherwise.
///
/// The check is not atomic: another process may create the returned path
/// before the caller uses it. Callers are expected to run sequentially with
/// exclusive access to `dir`.
///
/// Fails when a candidate cannot be checked at all (name too long, no
/// permission to search `dir`, ...).
pub fn unique_path(dir: &Path, base: &str, ext: &str) -> Result<PathBuf> {
    let candidate = dir.join(format!("{base}{ext}"));
    if !occupied(&candidate)? {
        return Ok(candidate);
    }

    let mut n: u64 = 2;
    loop {
        let candidate = dir.join(format!("{base}-{n}{ext}"));
        if !occupied(&candidate)? {
            return Ok(candidate);
        }
        n += 1;
    }
}

/// Only `NotFound` means free. Dangling symlinks count as taken.
fn occupied(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("check target {}", path.display())),
    }
}
