//! The authoritative walk that selects files for content export.

use crate::classify::is_binary_path;
use crate::options::ScanConfig;
use crate::rules::{RuleSet, relative_key};
use crate::types::FileEntry;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, FilterEntry, WalkDir};

type EntryFilter<'a> = Box<dyn FnMut(&DirEntry) -> bool + 'a>;

/// Lazy, single-pass iterator over exportable files.
///
/// Within each directory, files are yielded first in raw listing order, then
/// subdirectories are descended in raw listing order. Excluded directories
/// are pruned before descent.
pub struct FileCollector<'a> {
    inner: FilterEntry<walkdir::IntoIter, EntryFilter<'a>>,
    root: PathBuf,
    follow_symlinks: bool,
    max_file_bytes: u64,
}

impl<'a> FileCollector<'a> {
    pub fn new(root: &Path, config: &ScanConfig, rules: &'a RuleSet) -> Self {
        let filter_root = root.to_path_buf();
        let filter: EntryFilter<'a> = Box::new(move |entry: &DirEntry| {
            if entry.depth() == 0 {
                return true;
            }
            let rel = relative_key(&filter_root, entry.path());
            if entry.file_type().is_dir() {
                let name = entry.file_name().to_string_lossy();
                let pruned = rules.excludes_dir(&format!("{}/", rel), &name);
                if pruned {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Pruned directory {}", rel);
                }
                !pruned
            } else {
                !rules.excludes_file(&rel)
            }
        });
        let inner = WalkDir::new(root)
            .follow_links(config.follow_symlinks)
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
            .into_iter()
            .filter_entry(filter);
        Self {
            inner,
            root: root.to_path_buf(),
            follow_symlinks: config.follow_symlinks,
            max_file_bytes: config.max_file_bytes,
        }
    }

    fn accept(&self, entry: &DirEntry) -> Option<FileEntry> {
        if entry.depth() == 0 || entry.file_type().is_dir() {
            return None;
        }
        let is_symlink = entry.path_is_symlink();
        if is_symlink && !self.follow_symlinks {
            #[cfg(feature = "logging")]
            tracing::debug!("Skipping symlink {}", entry.path().display());
            return None;
        }
        if !entry.file_type().is_file() {
            return None;
        }
        if is_binary_path(entry.path()) {
            #[cfg(feature = "logging")]
            tracing::debug!("Skipping binary extension {}", entry.path().display());
            return None;
        }
        let size = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Cannot stat {}: {}", entry.path().display(), _e);
                return None;
            }
        };
        if size > self.max_file_bytes {
            #[cfg(feature = "logging")]
            tracing::debug!(
                "File too large ({} > {}), skipping {}",
                size,
                self.max_file_bytes,
                entry.path().display()
            );
            return None;
        }
        Some(FileEntry {
            path: entry.path().to_path_buf(),
            relative_path: relative_key(&self.root, entry.path()),
            size,
            is_symlink,
        })
    }
}

impl Iterator for FileCollector<'_> {
    type Item = FileEntry;

    fn next(&mut self) -> Option<FileEntry> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Walk error: {}", _e);
                    continue;
                }
            };
            if let Some(file) = self.accept(&entry) {
                return Some(file);
            }
        }
    }
}
