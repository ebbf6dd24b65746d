//! `shotname [--dry-run] <file>...` – describe and rename each file.

use anyhow::Result;
use shotname_core::config::ShotnameConfig;
use shotname_core::describe::OpenAiDescriber;
use shotname_core::rename::{self, RenameOptions};
use std::io;
use std::path::PathBuf;

pub fn run_rename(cfg: &ShotnameConfig, files: &[PathBuf], dry_run: bool) -> Result<()> {
    let describer = OpenAiDescriber::from_env(cfg)?;
    tracing::debug!(?describer, files = files.len(), dry_run, "starting batch");

    let opts = RenameOptions::from_config(cfg, dry_run);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = rename::run_batch(
        files,
        &describer,
        &opts,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    tracing::info!(
        renamed = summary.renamed,
        skipped = summary.skipped,
        dry_run,
        "batch finished"
    );
    Ok(())
}
