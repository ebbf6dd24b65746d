//! Parse chat completion response bodies.

use serde::Deserialize;

use super::DescribeError;

/// Longest error body echoed back in [`DescribeError::Http`].
const MAX_ERROR_SNIPPET: usize = 200;

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the trimmed text of the first choice.
///
/// A `null` or missing `content` yields an empty string; the sanitizer turns
/// that into the fallback name.
pub(crate) fn parse_completion(body: &[u8]) -> Result<String, DescribeError> {
    let completion: ChatCompletion = serde_json::from_slice(body)
        .map_err(|e| DescribeError::InvalidResponse(e.to_string()))?;
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or(DescribeError::NoChoices)?;
    Ok(choice
        .message
        .content
        .unwrap_or_default()
        .trim()
        .to_string())
}

/// Human-readable summary of an error response body.
///
/// Prefers the OpenAI `{"error": {"message": ...}}` envelope, else the raw
/// body cut to a short snippet.
pub(crate) fn error_summary(body: &[u8]) -> String {
    if let Ok(env) = serde_json::from_slice::<ErrorEnvelope>(body) {
        return env.error.message;
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    match text.char_indices().nth(MAX_ERROR_SNIPPET) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
