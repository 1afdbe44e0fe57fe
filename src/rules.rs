//! Ignore policy shared by the tree renderer and the file collector.
//!
//! A [`RuleSet`] is built once per run from the scan configuration and is
//! read-only afterwards. It composes three sources: the built-in directory
//! denylist (plus caller-supplied names), the hidden-entry policy, and an
//! optional gitignore-style [`PatternMatcher`] loaded from the root.

use crate::options::ScanConfig;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Directory names that are never descended into.
pub const BUILTIN_IGNORED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".idea",
    ".vscode",
    ".pytest_cache",
    "__pycache__",
    "node_modules",
    "venv",
    ".venv",
    "env",
    ".mypy_cache",
    "dist",
    "build",
    "target",
    ".gradle",
    ".next",
    ".turbo",
    ".cache",
];

/// Name of the pattern file looked up at the scan root.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

const HIDDEN_MARKER: char = '.';

/// A compiled path matcher keyed on root-relative, forward-slash paths.
pub trait PatternMatcher: fmt::Debug {
    fn is_ignored(&self, rel_path: &str, is_dir: bool) -> bool;
}

/// [`PatternMatcher`] backed by the `ignore` crate's gitignore engine.
#[derive(Debug)]
pub struct GitignoreMatcher {
    inner: Gitignore,
}

impl GitignoreMatcher {
    /// Compiles patterns from gitignore-formatted text.
    ///
    /// Returns `None` when any line fails to compile or no pattern remains.
    pub fn from_text(root: &Path, text: &str) -> Option<Self> {
        let mut builder = GitignoreBuilder::new(root);
        for line in text.lines() {
            if let Err(_e) = builder.add_line(None, line) {
                #[cfg(feature = "logging")]
                tracing::warn!("Malformed ignore pattern {:?}: {}", line, _e);
                return None;
            }
        }
        match builder.build() {
            Ok(inner) if !inner.is_empty() => Some(Self { inner }),
            Ok(_) => None,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Failed to compile ignore patterns: {}", _e);
                None
            }
        }
    }

    /// Loads `<root>/.gitignore`. A missing or unreadable file yields `None`.
    pub fn load(root: &Path) -> Option<Self> {
        let path = root.join(IGNORE_FILE_NAME);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("No usable ignore file at {}: {}", path.display(), _e);
                return None;
            }
        };
        Self::from_text(root, &String::from_utf8_lossy(&bytes))
    }
}

impl PatternMatcher for GitignoreMatcher {
    fn is_ignored(&self, rel_path: &str, is_dir: bool) -> bool {
        let rel = rel_path.trim_end_matches('/');
        if rel.is_empty() {
            return false;
        }
        self.inner
            .matched_path_or_any_parents(Path::new(rel), is_dir)
            .is_ignore()
    }
}

/// The effective exclusion rules for one run.
#[derive(Debug)]
pub struct RuleSet {
    ignored_dirs: BTreeSet<String>,
    include_hidden: bool,
    matcher: Option<Box<dyn PatternMatcher>>,
}

impl RuleSet {
    /// Builds the rule set for `config`, reading the root pattern file only
    /// when gitignore handling is enabled.
    pub fn build(config: &ScanConfig) -> Self {
        Self::build_at(&config.root, config)
    }

    /// Same as [`RuleSet::build`] but loads patterns relative to an already
    /// resolved root.
    pub fn build_at(root: &Path, config: &ScanConfig) -> Self {
        let matcher = if config.respect_gitignore {
            GitignoreMatcher::load(root).map(|m| Box::new(m) as Box<dyn PatternMatcher>)
        } else {
            None
        };
        Self::with_matcher(config, matcher)
    }

    /// Builds the rule set with an explicitly injected matcher.
    pub fn with_matcher(config: &ScanConfig, matcher: Option<Box<dyn PatternMatcher>>) -> Self {
        let ignored_dirs = BUILTIN_IGNORED_DIRS
            .iter()
            .map(|s| s.to_string())
            .chain(config.ignore_dirs.iter().cloned())
            .collect();
        Self {
            ignored_dirs,
            include_hidden: config.include_hidden,
            matcher,
        }
    }

    pub fn has_patterns(&self) -> bool {
        self.matcher.is_some()
    }

    /// Hidden-entry policy alone.
    pub fn is_hidden_excluded(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with(HIDDEN_MARKER)
    }

    /// Whether a directory is pruned. `rel_path` is root-relative and may
    /// carry a trailing `/`.
    pub fn excludes_dir(&self, rel_path: &str, name: &str) -> bool {
        if self.ignored_dirs.contains(name) || self.is_hidden_excluded(name) {
            return true;
        }
        self.matcher
            .as_ref()
            .is_some_and(|m| m.is_ignored(rel_path, true))
    }

    /// Whether a file is excluded. `rel_path` is root-relative.
    pub fn excludes_file(&self, rel_path: &str) -> bool {
        let name = rel_path.rsplit('/').next().unwrap_or(rel_path);
        if self.is_hidden_excluded(name) {
            return true;
        }
        self.matcher
            .as_ref()
            .is_some_and(|m| m.is_ignored(rel_path, false))
    }
}

/// Root-relative, forward-slash form of `path`. Falls back to the lossy full
/// path when `path` is not under `root`.
pub fn relative_key(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
