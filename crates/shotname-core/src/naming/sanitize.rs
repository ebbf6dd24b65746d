//! Description-to-filename sanitization.

/// Default maximum length, in characters, of a sanitized base name.
pub const DEFAULT_MAX_LEN: usize = 80;

/// Base name used when nothing usable survives sanitization.
pub const FALLBACK_BASE: &str = "untitled";

/// Byte budget for a base name: NAME_MAX (255) minus room for a `-<u64>`
/// collision suffix and the longest allowed extension (`.jpeg`).
pub const MAX_BASE_BYTES: usize = 224;

/// Sanitizes free-form model output into a filename-safe base name.
///
/// - Lowercases and trims the input
/// - Keeps alphanumerics, `-` and `_`; whitespace becomes `-`; anything else is
///   dropped, including uppercase letters that have no lowercase form
/// - Collapses runs of `-` into a single `-`
/// - Trims leading/trailing `-` and `_`
/// - Limits length to `max_len` characters and [`MAX_BASE_BYTES`] bytes, then
///   trims separators again so a cut inside a separator run does not leave a
///   dangling `-` or `_`
/// - Returns [`FALLBACK_BASE`] when the result would be empty
pub fn sanitize_description(text: &str, max_len: usize) -> String {
    let lowered = text.trim().to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;

    for c in lowered.chars() {
        let kept = if (c.is_alphanumeric() && !c.is_uppercase()) || c == '_' {
            c
        } else if c == '-' || c.is_whitespace() {
            '-'
        } else {
            continue;
        };

        if kept == '-' {
            if !prev_hyphen {
                out.push('-');
            }
            prev_hyphen = true;
        } else {
            out.push(kept);
            prev_hyphen = false;
        }
    }

    let trimmed = out.trim_matches(is_separator);
    let mut end = match trimmed.char_indices().nth(max_len) {
        Some((end, _)) => end,
        None => trimmed.len(),
    };
    while end > MAX_BASE_BYTES || !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    let truncated = &trimmed[..end];
    let base = truncated.trim_matches(is_separator);

    if base.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        base.to_string()
    }
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_'
}
