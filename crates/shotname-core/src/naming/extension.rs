//! Extension sniffing from the source path.

use std::path::Path;

/// Extensions kept as-is (compared case-insensitively), with leading dot.
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".webp"];

/// Extension used when the source has none or an unsupported one.
pub const DEFAULT_EXTENSION: &str = ".png";

/// Returns the lowercase extension of `path`, including the leading dot,
/// if it is one of [`ALLOWED_EXTENSIONS`]; otherwise [`DEFAULT_EXTENSION`].
///
/// Only the final extension counts: `shot.tar.JPG` → `.jpg`. Dotfiles such as
/// `.png` have no extension and get the default.
pub fn resolve_extension(path: &Path) -> &'static str {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e,
        None => return DEFAULT_EXTENSION,
    };
    ALLOWED_EXTENSIONS
        .iter()
        .copied()
        .find(|allowed| allowed[1..].eq_ignore_ascii_case(ext))
        .unwrap_or(DEFAULT_EXTENSION)
}

/// MIME type announced for an image with the given resolved extension.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        ".jpg" | ".jpeg" => "image/jpeg",
        ".webp" => "image/webp",
        _ => "image/png",
    }
}
