//! Utilities
use regex::Regex;

/// Strip terminal color escape sequences (`ESC [ ... m`) from content.
/// Stripping already clean content is a no-op.
pub fn strip_ansi(content: &str) -> String {
    let ansi_escape = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    ansi_escape.replace_all(content, "").to_string()
}

/// The first `length` characters of `content`.
/// Counted in characters, not bytes: byte slicing could split a multi-byte
/// character and panic.
pub fn truncate_chars(content: &str, length: usize) -> String {
    content.chars().take(length).collect()
}
