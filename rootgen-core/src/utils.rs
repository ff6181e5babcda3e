//! Shared path and name helpers.

use std::path::PathBuf;

/// Strip trailing path separators from a user-supplied directory.
///
/// A bare root (`/`) is kept as-is.
pub fn normalize_dir(raw: &str) -> PathBuf {
    let trimmed = raw.trim_end_matches(std::path::is_separator);
    if trimmed.is_empty() && !raw.is_empty() {
        // Only separators: this is the filesystem root.
        PathBuf::from(&raw[..1])
    } else {
        PathBuf::from(trimmed)
    }
}

/// Check whether `name` is a plain C/C++ identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
