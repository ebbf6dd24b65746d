//! Per-file rename driver and the sequential batch loop.
//!
//! Each path goes through: existence check → extension → encode → describe →
//! sanitize → unique target → rename (or report only, in dry-run mode).
//! Paths are processed strictly one after another with no shared state.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::ShotnameConfig;
use crate::describe::Describer;
use crate::encode;
use crate::naming::{self, DEFAULT_MAX_LEN};

/// Why a path was left alone before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    Directory,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFound => write!(f, "not found"),
            SkipReason::Directory => write!(f, "directory"),
        }
    }
}

/// Result of processing one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped(SkipReason),
    /// Dry run: the rename that would have happened.
    Planned { from: PathBuf, to: PathBuf },
    Renamed { from: PathBuf, to: PathBuf },
}

/// Knobs for the rename driver.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Report renames without touching the filesystem.
    pub dry_run: bool,
    /// Maximum length of the sanitized base name.
    pub max_len: usize,
    /// Pause after each described file when more files follow.
    pub pause: Duration,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            max_len: DEFAULT_MAX_LEN,
            pause: Duration::from_millis(200),
        }
    }
}

impl RenameOptions {
    pub fn from_config(cfg: &ShotnameConfig, dry_run: bool) -> Self {
        Self {
            dry_run,
            max_len: cfg.max_filename_len,
            pause: cfg.pause(),
        }
    }
}

/// Counts reported once a batch completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files renamed (or planned, in dry-run mode).
    pub renamed: usize,
    pub skipped: usize,
}

/// Returns a skip reason when `path` cannot be renamed at all.
pub fn check_source(path: &Path) -> Option<SkipReason> {
    match fs::metadata(path) {
        Err(_) => Some(SkipReason::NotFound),
        Ok(meta) if meta.is_dir() => Some(SkipReason::Directory),
        Ok(_) => None,
    }
}

/// Renames `from` to `to`, or does nothing in dry-run mode.
///
/// Both paths are in the same directory, so the rename is a single atomic
/// filesystem operation.
pub fn apply_rename(from: &Path, to: &Path, dry_run: bool) -> Result<Outcome> {
    if dry_run {
        return Ok(Outcome::Planned {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }
    fs::rename(from, to)
        .with_context(|| format!("rename {} -> {}", from.display(), to.display()))?;
    Ok(Outcome::Renamed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
    })
}

/// Runs the full pipeline for one path.
///
/// Describer failures are returned unchanged (with context); nothing is
/// retried.
pub fn rename_one(path: &Path, describer: &dyn Describer, opts: &RenameOptions) -> Result<Outcome> {
    if let Some(reason) = check_source(path) {
        return Ok(Outcome::Skipped(reason));
    }

    let ext = naming::resolve_extension(path);
    let image = encode::encode_image(path, ext)?;
    let description = describer
        .describe(&image)
        .with_context(|| format!("describe {}", path.display()))?;
    if description.trim().is_empty() {
        tracing::warn!(path = %path.display(), "empty description, using fallback name");
    }

    let target = naming::derive_target(path, &description, opts.max_len)?;
    apply_rename(path, &target, opts.dry_run)
}

/// Processes `paths` in order, one full pipeline at a time.
///
/// Writes `<source> -> <target>` to `out` for every renamed or planned file
/// and `SKIP (<reason>): <source>` to `err` for skipped ones. The first
/// error aborts the rest of the batch.
pub fn run_batch<P: AsRef<Path>>(
    paths: &[P],
    describer: &dyn Describer,
    opts: &RenameOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (i, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        match rename_one(path, describer, opts)? {
            Outcome::Skipped(reason) => {
                writeln!(err, "SKIP ({}): {}", reason, path.display())?;
                tracing::debug!(path = %path.display(), %reason, "skipped");
                summary.skipped += 1;
                continue;
            }
            Outcome::Planned { from, to } | Outcome::Renamed { from, to } => {
                writeln!(out, "{} -> {}", from.display(), to.display())?;
                tracing::info!(
                    from = %from.display(),
                    to = %to.display(),
                    dry_run = opts.dry_run,
                    "renamed"
                );
                summary.renamed += 1;
            }
        }

        if i + 1 < paths.len() && !opts.pause.is_zero() {
            std::thread::sleep(opts.pause);
        }
    }

    Ok(summary)
}
