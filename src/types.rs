use std::path::PathBuf;

/// A file selected for content export.
///
/// There is no binary flag: files with a binary extension are never yielded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as reached by the walk (under the scan root).
    pub path: PathBuf,
    /// Root-relative, forward-slash separated. Used as the section header.
    pub relative_path: String,
    /// Size in bytes, following symlinks when they are followed.
    pub size: u64,
    /// Whether the walk reached this file through a symlink.
    pub is_symlink: bool,
}

/// One file section as it is about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub relative_path: String,
    /// Decoded text with its original end-of-line markers.
    pub text: String,
    pub fence: String,
    pub language: Option<&'static str>,
}

/// The assembled document and its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Full document, LF line endings.
    pub text: String,
    pub files_exported: usize,
    /// Characters up to and including the last emitted file section.
    pub total_chars: usize,
    pub truncated: bool,
    /// Directories listed in the tree section.
    pub tree_dirs: usize,
    /// Files listed in the tree section.
    pub tree_files: usize,
}
