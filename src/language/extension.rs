//! Trailing file-extension hints.
//!
//! Snippets copied out of an editor sometimes end with the file name they
//! came from (`// main.rs`, `# saved as build.py`). The extension after the
//! last dot of the final token on the last line is the hint.

/// Extract a trailing extension hint from the last line of `content`.
///
/// Returns the extension lowercased and without the leading dot, or None if
/// the last line does not end in a `name.ext` token.
pub fn trailing_extension(content: &str) -> Option<String> {
    let last_line = content.trim_end().lines().next_back()?;
    let token = last_line.split_whitespace().next_back()?;

    let dot_pos = token.rfind('.')?;
    let ext = &token[dot_pos + 1..];
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
