//! Filename derivation from image descriptions.
//!
//! Turns untrusted model output into a filename-safe base, picks the
//! extension from the source path, and finds a free target path next to the
//! source file.

mod extension;
mod sanitize;
mod unique;

pub use extension::{mime_for_extension, resolve_extension, ALLOWED_EXTENSIONS, DEFAULT_EXTENSION};
pub use sanitize::{sanitize_description, DEFAULT_MAX_LEN, FALLBACK_BASE, MAX_BASE_BYTES};
pub use unique::unique_path;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Computes the absolute, currently unused path that `source` should be
/// renamed to, given the model's `description` of it.
///
/// The target always lives in the source's own directory and keeps the
/// resolved extension of the source.
///
/// # Examples
///
/// - `/shots/IMG_01.PNG` described as `"Slack: team chat!"` → `/shots/slack-team-chat.png`
/// - same, when `slack-team-chat.png` already exists → `/shots/slack-team-chat-2.png`
pub fn derive_target(source: &Path, description: &str, max_len: usize) -> Result<PathBuf> {
    let ext = resolve_extension(source);
    let base = sanitize_description(description, max_len);
    let dir = source_dir(source)?;
    unique_path(&dir, &base, ext)
}

/// Absolute directory containing `source`.
pub fn source_dir(source: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(source)
        .with_context(|| format!("resolve absolute path of {}", source.display()))?;
    let dir = abs
        .parent()
        .with_context(|| format!("{} has no parent directory", abs.display()))?;
    Ok(dir.to_path_buf())
}
