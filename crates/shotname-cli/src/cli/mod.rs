//! CLI for shotname.

mod commands;

use anyhow::Result;
use clap::Parser;
use shotname_core::config::{self, ShotnameConfig};
use std::path::PathBuf;

use commands::run_rename;

/// Rename screenshots and images after an AI description of what they show.
#[derive(Debug, Parser)]
#[command(name = "shotname")]
#[command(
    about = "Rename images from AI-generated descriptions of their content",
    long_about = "Rename images from AI-generated descriptions of their content.\n\n\
                  Each file is sent to an OpenAI-compatible vision model, the reply is \
                  turned into a filename-safe name, and the file is renamed in place \
                  (with -2, -3, ... appended on collisions). Requires OPENAI_API_KEY."
)]
pub struct Cli {
    /// Print the planned renames without touching any file.
    #[arg(long, visible_alias = "dryrun")]
    pub dry_run: bool,

    /// Vision model to use (overrides config).
    #[arg(long, value_name = "NAME")]
    pub model: Option<String>,

    /// Maximum length of the generated name, extension excluded (overrides config).
    #[arg(long, value_name = "N")]
    pub max_len: Option<usize>,

    /// Pause between files in milliseconds (overrides config).
    #[arg(long, value_name = "MS")]
    pub pause_ms: Option<u64>,

    /// Image files to rename (png, jpg, jpeg, webp; anything else is renamed as .png).
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let cfg = cli.apply_overrides(cfg)?;

        run_rename(&cfg, &cli.files, cli.dry_run)
    }

    /// Command-line flags win over the config file.
    pub fn apply_overrides(&self, mut cfg: ShotnameConfig) -> Result<ShotnameConfig> {
        if let Some(model) = &self.model {
            cfg.model = model.clone();
        }
        if let Some(max_len) = self.max_len {
            cfg.max_filename_len = max_len;
        }
        if let Some(pause_ms) = self.pause_ms {
            cfg.pause_ms = pause_ms;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests;
