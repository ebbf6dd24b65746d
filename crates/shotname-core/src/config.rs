use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::naming::{DEFAULT_MAX_LEN, FALLBACK_BASE, MAX_BASE_BYTES};

/// Global configuration loaded from `~/.config/shotname/config.toml`.
///
/// The file itself is optional and never written by shotname; every field in
/// it is optional too, missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotnameConfig {
    /// Vision-capable chat model used to describe images.
    pub model: String,
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`).
    pub api_base: String,
    /// Upper bound on tokens the model may spend on a description.
    pub max_tokens: u32,
    /// Maximum length, in characters, of the sanitized base name.
    pub max_filename_len: usize,
    /// Pause between files that hit the API, in milliseconds.
    pub pause_ms: u64,
    /// Connection timeout for the API request, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout for the API request, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ShotnameConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4.1-mini".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            max_tokens: 40,
            max_filename_len: DEFAULT_MAX_LEN,
            pause_ms: 200,
            connect_timeout_secs: 15,
            request_timeout_secs: 120,
        }
    }
}

impl ShotnameConfig {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Rejects values the pipeline cannot honor.
    ///
    /// `max_filename_len` must fit the fallback base, and a base of that
    /// length plus a collision suffix and extension must fit in NAME_MAX.
    pub fn validate(&self) -> Result<()> {
        if self.max_filename_len < FALLBACK_BASE.len() {
            bail!(
                "max_filename_len must be at least {} (got {})",
                FALLBACK_BASE.len(),
                self.max_filename_len
            );
        }
        if self.max_filename_len > MAX_BASE_BYTES {
            bail!(
                "max_filename_len must be at most {} (got {})",
                MAX_BASE_BYTES,
                self.max_filename_len
            );
        }
        if self.model.trim().is_empty() {
            bail!("model must not be empty");
        }
        if self.api_base.trim().is_empty() {
            bail!("api_base must not be empty");
        }
        Ok(())
    }
}

/// Existing `config.toml` under the XDG config dirs, if any. Creates nothing.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shotname")
        .context("resolve XDG config directories")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from disk, or the defaults when there is no file.
pub fn load() -> Result<ShotnameConfig> {
    let path = match config_path() {
        Ok(Some(path)) => path,
        Ok(None) => {
            tracing::debug!("no config file, using defaults");
            return Ok(ShotnameConfig::default());
        }
        Err(e) => {
            tracing::warn!("{e:#}; using default config");
            return Ok(ShotnameConfig::default());
        }
    };
    tracing::debug!("loading config from {}", path.display());
    load_from(&path)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<ShotnameConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ShotnameConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
