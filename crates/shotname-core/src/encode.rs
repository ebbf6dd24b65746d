//! Image encoding for embedding in a JSON request.

use anyhow::{Context, Result};
use base64::Engine;
use std::fs;
use std::path::Path;

use crate::naming::mime_for_extension;

/// An image ready to be sent inline: standard base64 payload plus its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: &'static str,
    pub base64: String,
}

impl EncodedImage {
    pub fn from_bytes(bytes: &[u8], mime: &'static str) -> Self {
        Self {
            mime,
            base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// `data:<mime>;base64,<payload>` form accepted by vision chat APIs.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Reads `path` and encodes it, labelling it with the MIME type of the
/// already resolved extension `ext`.
pub fn encode_image(path: &Path, ext: &str) -> Result<EncodedImage> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "encoded image");
    Ok(EncodedImage::from_bytes(&bytes, mime_for_extension(ext)))
}
