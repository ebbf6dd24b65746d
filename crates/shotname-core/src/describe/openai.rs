//! OpenAI chat completions client for image descriptions.
//!
//! Uses the curl crate (libcurl) for a single blocking POST per image, with
//! the image embedded as a base64 data URL. Works with any OpenAI-compatible
//! endpoint that accepts `image_url` content parts.

use serde_json::json;
use std::time::Duration;

use super::parse::{error_summary, parse_completion};
use super::{DescribeError, Describer};
use crate::config::ShotnameConfig;
use crate::encode::EncodedImage;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Instruction sent alongside every image.
pub const DESCRIBE_PROMPT: &str = "Create a concise 5–8 word filename for this screenshot. Include app/site name if visible. No punctuation.";

/// Vision describer backed by an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiDescriber {
    api_key: String,
    api_base: String,
    model: String,
    max_tokens: u32,
    connect_timeout: Duration,
    timeout: Duration,
}

impl std::fmt::Debug for OpenAiDescriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiDescriber")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

impl OpenAiDescriber {
    pub fn new(api_key: impl Into<String>, cfg: &ShotnameConfig) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            max_tokens: cfg.max_tokens,
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.request_timeout(),
        }
    }

    /// Build a describer with the credential from [`API_KEY_ENV`].
    pub fn from_env(cfg: &ShotnameConfig) -> Result<Self, DescribeError> {
        let key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(DescribeError::MissingApiKey(API_KEY_ENV))?;
        Ok(Self::new(key.trim(), cfg))
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    fn request_body(&self, image: &EncodedImage) -> serde_json::Value {
        json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": DESCRIBE_PROMPT },
                        { "type": "image_url", "image_url": { "url": image.data_url() } }
                    ]
                }
            ]
        })
    }

    /// POST `body` and return (status, response body).
    fn post(&self, url: &str, body: &[u8]) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut response = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        list.append(&format!("Authorization: Bearer {}", self.api_key))?;
        list.append("Content-Type: application/json")?;
        // Send the body right away instead of waiting on 100-continue.
        list.append("Expect:")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, response))
    }
}

impl Describer for OpenAiDescriber {
    fn describe(&self, image: &EncodedImage) -> Result<String, DescribeError> {
        let url = self.endpoint();
        let body = self.request_body(image).to_string();

        tracing::debug!(
            url = %url,
            model = %self.model,
            payload_bytes = body.len(),
            "requesting image description"
        );

        let (code, response) = self
            .post(&url, body.as_bytes())
            .map_err(|e| DescribeError::Transport(url.clone(), e))?;

        if !(200..300).contains(&code) {
            return Err(DescribeError::Http(code, error_summary(&response)));
        }

        let description = parse_completion(&response)?;
        tracing::debug!(description = %description, "received description");
        Ok(description)
    }
}
