//! Document text format: intro, sections, fences and line endings.
//!
//! Everything here is pure string formatting. The assembler in
//! [`crate::engine`] decides what gets written and when to stop.

use crate::options::EolMode;
use crate::types::ExportedFile;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::path::Path;

pub const FENCE_CHAR: char = '`';
const MIN_FENCE_LEN: usize = 3;

pub const TREE_HEADER: &str = "# Section 1 - Tree";
pub const FILES_HEADER: &str = "# Section 2 - Files and contents";
pub const FILE_HEADER_PREFIX: &str = "## File: ";
pub const TRUNCATION_PREFIX: &str = "> Output truncated:";

// Leftmost alternative wins, so "\r\n" and "\n\r" are single breaks.
static EOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n\r|\r|\n").unwrap());

/// Rewrites every end-of-line variant to the one selected by `mode`.
/// Blank lines are preserved.
pub fn normalize_eol(text: &str, mode: EolMode) -> String {
    EOL.replace_all(text, NoExpand(mode.as_str())).into_owned()
}

/// Shortest fence longer than every backtick run in `text`, never below 3.
pub fn pick_fence(text: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for ch in text.chars() {
        if ch == FENCE_CHAR {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    FENCE_CHAR.to_string().repeat(MIN_FENCE_LEN.max(longest + 1))
}

/// Static language label for a fence, by file name then extension.
pub fn language_for(path: &Path) -> Option<&'static str> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    match name {
        "Dockerfile" => return Some("dockerfile"),
        "Makefile" => return Some("make"),
        _ => {}
    }
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let lang = match ext.as_str() {
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        "tsx" => "tsx",
        "jsx" => "jsx",
        "json" => "json",
        "yml" | "yaml" => "yaml",
        "toml" => "toml",
        "ini" | "cfg" => "ini",
        "md" => "markdown",
        "rst" => "rst",
        "sql" => "sql",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "less" => "less",
        "go" => "go",
        "java" => "java",
        "kt" => "kotlin",
        "rs" => "rust",
        "c" | "h" => "c",
        "hpp" | "hh" | "cpp" | "cc" => "cpp",
        "m" | "mm" => "objectivec",
        "swift" => "swift",
        "sh" | "bash" => "bash",
        "zsh" => "zsh",
        "ps1" => "powershell",
        "dockerfile" => "dockerfile",
        "makefile" => "make",
        _ => return None,
    };
    Some(lang)
}

pub fn intro(project_name: &str) -> String {
    format!(
        "Here is my project **{}**. Read **everything that follows** carefully \
         (directory tree and file contents) and take it into account when answering.\n\n",
        project_name
    )
}

pub fn tree_section(tree: &str) -> String {
    format!("{}\n\n``` text\n{}\n```\n\n", TREE_HEADER, tree)
}

pub fn files_header() -> String {
    format!("{}\n\n", FILES_HEADER)
}

/// One file section: header, opening fence, LF-normalized content with
/// trailing newlines removed, closing fence, blank line.
pub fn file_section(file: &ExportedFile) -> String {
    let body = normalize_eol(&file.text, EolMode::Lf);
    let opening = match file.language {
        Some(lang) => format!("{} {}", file.fence, lang),
        None => file.fence.clone(),
    };
    format!(
        "{}{}\n{}\n{}\n{}\n\n",
        FILE_HEADER_PREFIX,
        file.relative_path,
        opening,
        body.trim_end_matches('\n'),
        file.fence
    )
}

pub fn truncation_notice(limit: usize) -> String {
    format!(
        "{} --max-output-chars={} exceeded.\n\n",
        TRUNCATION_PREFIX, limit
    )
}

pub fn statistics(files: usize, chars: usize) -> String {
    format!(
        "---\n\nStatistics: {} files exported; total length ~= {} characters.\n",
        files, chars
    )
}
