//! Binary/text classification by extension and by content probe.

use std::path::Path;

/// Extensions (lowercase, without the dot) never exported as text.
pub const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "pdf", "zip", "gz", "tgz", "xz", "7z",
    "rar", "jar", "war", "class", "o", "so", "dll", "dylib", "exe", "bin", "dat", "lock", "ttf",
    "otf", "woff", "woff2", "mp3", "flac", "wav", "mp4", "mkv", "mov", "avi", "heic",
];

/// Bytes inspected before a full decode is attempted.
pub const PROBE_LEN: usize = 8192;

/// Share of non-text bytes above which a probe is considered binary.
const NON_TEXT_RATIO: f64 = 0.30;

/// Classifies by the last extension, case-insensitively.
pub fn is_binary_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| BINARY_EXTENSIONS.contains(&e.as_str()))
}

fn is_texty(b: u8) -> bool {
    matches!(b, 7 | 8 | 9 | 10 | 12 | 13 | 27 | 32..=126)
}

/// Heuristic used on a probe chunk: any NUL byte, or more than 30% of bytes
/// outside printable ASCII and common control characters, means binary.
///
/// An empty chunk is text.
pub fn is_probably_binary(chunk: &[u8]) -> bool {
    if chunk.contains(&0) {
        return true;
    }
    let non_text = chunk.iter().filter(|&&b| !is_texty(b)).count();
    non_text as f64 / chunk.len().max(1) as f64 > NON_TEXT_RATIO
}
