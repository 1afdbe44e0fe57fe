use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Default per-file byte ceiling for content export.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 4_000_000;
/// Default character ceiling for a clipboard copy.
pub const DEFAULT_CLIPBOARD_MAX_CHARS: usize = 700_000;

/// Line ending used when the finished document is handed to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EolMode {
    #[default]
    Lf,
    Crlf,
    Platform,
}
impl EolMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EolMode::Lf => "\n",
            EolMode::Crlf => "\r\n",
            EolMode::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    /// Directory names pruned in addition to the built-in denylist.
    pub ignore_dirs: BTreeSet<String>,
    pub max_file_bytes: u64,
    /// Zero means unlimited.
    pub max_output_chars: usize,
    pub follow_symlinks: bool,
    pub eol: EolMode,
    pub clipboard_max_chars: usize,
}
impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_hidden: false,
            respect_gitignore: false,
            ignore_dirs: BTreeSet::new(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_output_chars: 0,
            follow_symlinks: false,
            eol: EolMode::Lf,
            clipboard_max_chars: DEFAULT_CLIPBOARD_MAX_CHARS,
        }
    }
}
#[derive(Debug, Default)]
pub struct ScanBuilder {
    config: ScanConfig,
}
impl ScanBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            config: ScanConfig {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.config.include_hidden = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.config.respect_gitignore = yes;
        self
    }
    pub fn ignore_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ignore_dirs = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn ignore_dir(mut self, name: impl Into<String>) -> Self {
        self.config.ignore_dirs.insert(name.into());
        self
    }
    pub fn max_file_bytes(mut self, limit: u64) -> Self {
        self.config.max_file_bytes = limit;
        self
    }
    pub fn max_output_chars(mut self, limit: usize) -> Self {
        self.config.max_output_chars = limit;
        self
    }
    pub fn follow_symlinks(mut self, yes: bool) -> Self {
        self.config.follow_symlinks = yes;
        self
    }
    pub fn eol(mut self, mode: EolMode) -> Self {
        self.config.eol = mode;
        self
    }
    pub fn clipboard_max_chars(mut self, limit: usize) -> Self {
        self.config.clipboard_max_chars = limit;
        self
    }
    pub fn build(self) -> ScanConfig {
        self.config
    }
}
