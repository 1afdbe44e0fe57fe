//! ASCII rendering of the directory tree.

use crate::rules::{RuleSet, relative_key};
use std::cmp::Ordering;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// Rendered tree text plus the number of directories and files listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTree {
    pub text: String,
    pub dirs: usize,
    pub files: usize,
}

struct Child {
    /// Display form.
    name: String,
    file_name: OsString,
    is_dir: bool,
}

/// Base name of `root` for display. Falls back to the full path when there is
/// no final component (e.g. `/`).
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// First line of the tree: the root name with a trailing `/`.
pub fn root_line(root: &Path) -> String {
    let name = root_name(root);
    if name.ends_with('/') {
        name
    } else {
        format!("{}/", name)
    }
}

/// Renders the tree rooted at `root`.
///
/// Symlinks are never listed or followed. Children are ordered directories
/// first, then by case-insensitive name. An unlistable directory gets a
/// single `[permission denied] <name>` line in place of its children.
pub fn render_tree(root: &Path, rules: &RuleSet) -> RenderedTree {
    let mut out = RenderedTree {
        text: String::new(),
        dirs: 0,
        files: 0,
    };
    let mut lines = vec![root_line(root)];
    walk(root, root, "", rules, &mut lines, &mut out);
    out.text = lines.join("\n");
    out
}

fn list_children(dir: &Path, rules: &RuleSet) -> std::io::Result<Vec<Child>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_symlink() {
            continue;
        }
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy().into_owned();
        if rules.is_hidden_excluded(&name) {
            continue;
        }
        children.push(Child {
            name,
            file_name,
            is_dir: file_type.is_dir(),
        });
    }
    children.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });
    Ok(children)
}

fn walk(
    root: &Path,
    dir: &Path,
    prefix: &str,
    rules: &RuleSet,
    lines: &mut Vec<String>,
    out: &mut RenderedTree,
) {
    let children = match list_children(dir, rules) {
        Ok(children) => children,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            lines.push(format!("{}[permission denied] {}", prefix, name));
            return;
        }
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Cannot list {}: {}", dir.display(), _e);
            return;
        }
    };

    let kept: Vec<Child> = children
        .into_iter()
        .filter(|child| {
            let rel = relative_key(root, &dir.join(&child.file_name));
            if child.is_dir {
                !rules.excludes_dir(&format!("{}/", rel), &child.name)
            } else {
                !rules.excludes_file(&rel)
            }
        })
        .collect();

    let total = kept.len();
    for (i, child) in kept.iter().enumerate() {
        let is_last = i + 1 == total;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        if child.is_dir {
            lines.push(format!("{}{}{}/", prefix, connector, child.name));
            out.dirs += 1;
            let child_prefix = format!(
                "{}{}",
                prefix,
                if is_last { BLANK_INDENT } else { PIPE_INDENT }
            );
            walk(root, &dir.join(&child.file_name), &child_prefix, rules, lines, out);
        } else {
            lines.push(format!("{}{}{}", prefix, connector, child.name));
            out.files += 1;
        }
    }
}
