use crate::error::RepomapError;
use crate::options::ScanConfig;
use crate::output;
use crate::reader::ContentReader;
use crate::rules::RuleSet;
use crate::tree::{render_tree, root_name};
use crate::types::{Document, ExportedFile};
use crate::walk::FileCollector;
use std::fs;
use std::path::Path;

/// Accumulates document text and its running character count.
struct DocBuffer {
    text: String,
    chars: usize,
}
impl DocBuffer {
    fn new() -> Self {
        Self {
            text: String::with_capacity(4096),
            chars: 0,
        }
    }
    fn push(&mut self, chunk: &str) {
        self.chars += chunk.chars().count();
        self.text.push_str(chunk);
    }
}

fn resolve_root(root: &Path) -> Result<std::path::PathBuf, RepomapError> {
    let resolved = fs::canonicalize(root).map_err(|e| RepomapError::io(root, e))?;
    if !resolved.is_dir() {
        return Err(RepomapError::InvalidRoot(resolved));
    }
    Ok(resolved)
}

/// Builds the full document for `config`.
///
/// Missing, binary, oversized or unreadable files are left out silently. The
/// only error is a root that cannot be resolved to a directory.
pub fn assemble(config: &ScanConfig) -> Result<Document, RepomapError> {
    let root = resolve_root(&config.root)?;
    let rules = RuleSet::build_at(&root, config);
    assemble_with(&root, config, &rules, &ContentReader::default())
}

/// [`assemble`] with a prepared rule set and reader. `root` must already be
/// resolved.
pub fn assemble_with(
    root: &Path,
    config: &ScanConfig,
    rules: &RuleSet,
    reader: &ContentReader,
) -> Result<Document, RepomapError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting repomap with root: {}", root.display());
    let tree = render_tree(root, rules);
    let project_name = root_name(root);

    let mut doc = DocBuffer::new();
    doc.push(&output::intro(&project_name));
    doc.push(&output::tree_section(&tree.text));
    doc.push(&output::files_header());

    let mut total_chars = doc.chars;
    let mut files_exported = 0;
    let mut truncated = false;

    for entry in FileCollector::new(root, config, rules) {
        let Some(text) = reader.read(&entry.path) else {
            continue;
        };
        let file = ExportedFile {
            fence: output::pick_fence(&text),
            language: output::language_for(&entry.path),
            relative_path: entry.relative_path,
            text,
        };
        doc.push(&output::file_section(&file));
        files_exported += 1;
        total_chars = doc.chars;
        if config.max_output_chars > 0 && total_chars > config.max_output_chars {
            #[cfg(feature = "logging")]
            tracing::info!(
                "Output limit of {} characters exceeded after {}",
                config.max_output_chars,
                file.relative_path
            );
            doc.push(&output::truncation_notice(config.max_output_chars));
            truncated = true;
            break;
        }
    }

    doc.push(&output::statistics(files_exported, total_chars));
    Ok(Document {
        text: doc.text,
        files_exported,
        total_chars,
        truncated,
        tree_dirs: tree.dirs,
        tree_files: tree.files,
    })
}
