use repomap::output::{FILES_HEADER, statistics};
use repomap::{Document, ScanBuilder, ScanConfig, assemble};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn run(config: ScanConfig) -> Document {
    assemble(&config).unwrap()
}
fn tree_part(doc: &Document) -> &str {
    let i = doc.text.find(FILES_HEADER).unwrap();
    &doc.text[..i]
}
fn files_part(doc: &Document) -> &str {
    let i = doc.text.find(FILES_HEADER).unwrap();
    &doc.text[i..]
}
fn default_doc(root: &Path) -> Document {
    run(ScanBuilder::new(root).build())
}
#[test]
fn integration_smoke_two_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.py"), "print('x')").unwrap();
    let doc = default_doc(dir.path());
    let files = files_part(&doc);
    assert!(files.contains("## File: a.txt\n```\nhello\n```\n\n"));
    assert!(files.contains("## File: b.py\n``` python\nprint('x')\n```\n\n"));
    let tree = tree_part(&doc);
    assert!(tree.contains("# Section 1 - Tree\n\n``` text\n"));
    assert!(tree.contains("├── a.txt\n└── b.py\n```"));
    assert_eq!(doc.files_exported, 2);
    assert!(!doc.truncated);
    assert!(doc.text.ends_with(&format!(
        "Statistics: 2 files exported; total length ~= {} characters.\n",
        doc.total_chars
    )));
}
#[test]
fn integration_intro_names_root() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("myproject")).unwrap();
    let doc = default_doc(&dir.path().join("myproject"));
    assert!(doc.text.starts_with("Here is my project **myproject**."));
    assert!(doc.text.contains("``` text\nmyproject/\n```"));
    assert!(!doc.text.contains("```text"));
    assert_eq!(doc.files_exported, 0);
}
#[test]
fn integration_statistics_match_document() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.md"), "# Título\n\nÇa marche.").unwrap();
    fs::write(dir.path().join("two.rs"), "fn main() {}\n").unwrap();
    let doc = default_doc(dir.path());
    let trailer = statistics(doc.files_exported, doc.total_chars);
    assert!(doc.text.ends_with(&trailer));
    assert_eq!(
        doc.text.chars().count(),
        doc.total_chars + trailer.chars().count()
    );
    assert!(trailer.starts_with("---\n\nStatistics: 2 files exported; total length ~= "));
}
#[test]
fn integration_tree_output() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("pkg/f.py"), "print(123)").unwrap();
    let doc = default_doc(dir.path());
    assert!(tree_part(&doc).contains("└── pkg/\n    └── f.py"));
    assert!(files_part(&doc).contains("## File: pkg/f.py\n``` python\nprint(123)\n```"));
    assert_eq!(doc.tree_dirs, 1);
    assert_eq!(doc.tree_files, 1);
}
#[test]
fn integration_binary_by_extension_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("file.bin"), [0u8, 1, 2, 3]).unwrap();
    let doc = default_doc(dir.path());
    assert!(tree_part(&doc).contains("file.bin"));
    assert!(!files_part(&doc).contains("file.bin"));
    assert_eq!(doc.files_exported, 0);
}
#[test]
fn integration_binary_by_content_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.txt"), b"abc\0def").unwrap();
    fs::write(dir.path().join("ok.txt"), "fine").unwrap();
    let doc = default_doc(dir.path());
    assert!(tree_part(&doc).contains("data.txt"));
    assert!(!files_part(&doc).contains("data.txt"));
    assert!(files_part(&doc).contains("## File: ok.txt"));
    assert_eq!(doc.files_exported, 1);
}
#[test]
fn integration_max_file_bytes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("big.txt"), "x".repeat(5000)).unwrap();
    let doc = run(ScanBuilder::new(dir.path()).max_file_bytes(1000).build());
    assert!(tree_part(&doc).contains("big.txt"));
    assert!(!files_part(&doc).contains("big.txt"));
}
#[test]
fn integration_max_output_chars_truncates() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "y".repeat(5000)).unwrap();
    fs::write(dir.path().join("b.txt"), "z".repeat(5000)).unwrap();
    let doc = run(ScanBuilder::new(dir.path()).max_output_chars(1000).build());
    assert!(doc.truncated);
    assert!(
        doc.text
            .contains("> Output truncated: --max-output-chars=1000 exceeded.\n\n---\n\n")
    );
    assert_eq!(doc.text.matches("## File: ").count(), 1);
    assert_eq!(doc.files_exported, 1);
    assert!(doc.total_chars > 1000);
}
#[test]
fn integration_unlimited_output_not_truncated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "y".repeat(5000)).unwrap();
    let doc = default_doc(dir.path());
    assert!(!doc.truncated);
    assert!(!doc.text.contains("> Output truncated:"));
}
#[test]
fn integration_hidden_excluded_by_default() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden.txt"), "secret").unwrap();
    fs::create_dir(dir.path().join(".hidden_dir")).unwrap();
    fs::write(dir.path().join(".hidden_dir/x.txt"), "xx").unwrap();
    let doc = default_doc(dir.path());
    assert!(!doc.text.contains(".hidden.txt"));
    assert!(!doc.text.contains(".hidden_dir"));
    assert!(!doc.text.contains("x.txt"));
    assert!(!doc.text.contains("secret"));
}
#[test]
fn integration_hidden_included_when_flag() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden.txt"), "secret").unwrap();
    fs::create_dir(dir.path().join(".config")).unwrap();
    fs::write(dir.path().join(".config/app.toml"), "a = 1").unwrap();
    let doc = run(ScanBuilder::new(dir.path()).include_hidden(true).build());
    assert!(tree_part(&doc).contains(".hidden.txt"));
    assert!(tree_part(&doc).contains(".config/"));
    let files = files_part(&doc);
    assert!(files.contains("## File: .hidden.txt\n```\nsecret\n```"));
    assert!(files.contains("## File: .config/app.toml\n``` toml\na = 1\n```"));
}
#[test]
fn integration_gitignore_respected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "foo.txt\nbar/\n").unwrap();
    fs::write(dir.path().join("foo.txt"), "secret").unwrap();
    fs::write(dir.path().join("kept.txt"), "keep").unwrap();
    fs::create_dir(dir.path().join("bar")).unwrap();
    fs::write(dir.path().join("bar/a.txt"), "should be ignored").unwrap();
    let doc = run(ScanBuilder::new(dir.path()).respect_gitignore(true).build());
    assert!(!doc.text.contains("foo.txt"));
    assert!(!doc.text.contains("bar/"));
    assert!(!doc.text.contains("a.txt"));
    assert!(!doc.text.contains("should be ignored"));
    assert!(tree_part(&doc).contains("kept.txt"));
    assert!(files_part(&doc).contains("## File: kept.txt\n```\nkeep\n```"));
}
#[test]
fn integration_gitignore_ignored_unless_enabled() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "foo.txt\n").unwrap();
    fs::write(dir.path().join("foo.txt"), "visible").unwrap();
    let doc = default_doc(dir.path());
    assert!(files_part(&doc).contains("## File: foo.txt"));
}
#[test]
fn integration_denylist_wins_over_negation() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "!node_modules/\n!vendor/\n").unwrap();
    fs::create_dir_all(dir.path().join("node_modules/pkg/lib")).unwrap();
    fs::write(dir.path().join("node_modules/pkg/lib/index.js"), "module.exports = 1").unwrap();
    fs::create_dir(dir.path().join("vendor")).unwrap();
    fs::write(dir.path().join("vendor/dep.go"), "package dep").unwrap();
    fs::write(dir.path().join("main.go"), "package main").unwrap();
    let doc = run(
        ScanBuilder::new(dir.path())
            .respect_gitignore(true)
            .ignore_dir("vendor")
            .build(),
    );
    assert!(!doc.text.contains("node_modules"));
    assert!(!doc.text.contains("index.js"));
    assert!(!doc.text.contains("vendor"));
    assert!(!doc.text.contains("dep.go"));
    assert!(files_part(&doc).contains("## File: main.go\n``` go\npackage main\n```"));
}
#[test]
fn integration_fence_longer_than_content_run() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("notes.md"),
        "Example:\n\n````rust\nfn x() {}\n````\n",
    )
    .unwrap();
    let doc = default_doc(dir.path());
    assert!(files_part(&doc).contains(
        "## File: notes.md\n````` markdown\nExample:\n\n````rust\nfn x() {}\n````\n`````\n\n"
    ));
}
#[test]
fn integration_eol_normalized_and_trailing_newlines_trimmed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("mixed.txt"), "a\r\nb\rc\n\n\n").unwrap();
    let doc = default_doc(dir.path());
    assert!(files_part(&doc).contains("## File: mixed.txt\n```\na\nb\nc\n```\n\n"));
    assert!(!doc.text.contains('\r'));
}
#[test]
fn integration_export_order_differs_from_tree_order() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::write(dir.path().join("a/inner.txt"), "inner").unwrap();
    fs::write(dir.path().join("z.txt"), "zed").unwrap();
    let doc = default_doc(dir.path());
    let tree = tree_part(&doc);
    assert!(tree.find("── a/").unwrap() < tree.find("── z.txt").unwrap());
    let files = files_part(&doc);
    assert!(files.find("## File: z.txt").unwrap() < files.find("## File: a/inner.txt").unwrap());
}
#[test]
fn integration_invalid_root_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    assert!(assemble(&ScanBuilder::new(&missing).build()).is_err());
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    assert!(assemble(&ScanBuilder::new(&file).build()).is_err());
}
#[cfg(unix)]
#[test]
fn integration_symlink_not_followed_by_default() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("real.txt");
    fs::write(&target, "real").unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("link.txt")).unwrap();
    let doc = run(ScanBuilder::new(dir.path()).follow_symlinks(false).build());
    assert!(tree_part(&doc).contains("real.txt"));
    assert!(!doc.text.contains("link.txt"));
    assert!(files_part(&doc).contains("## File: real.txt\n```\nreal\n```"));
    assert_eq!(doc.files_exported, 1);
}
#[cfg(unix)]
#[test]
fn integration_symlink_followed_when_enabled() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("real.txt");
    fs::write(&target, "real").unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("link.txt")).unwrap();
    let doc = run(ScanBuilder::new(dir.path()).follow_symlinks(true).build());
    assert!(!tree_part(&doc).contains("link.txt"));
    let files = files_part(&doc);
    assert!(files.contains("## File: link.txt\n```\nreal\n```"));
    assert!(files.contains("## File: real.txt\n```\nreal\n```"));
    assert_eq!(doc.files_exported, 2);
}
#[cfg(unix)]
#[test]
fn integration_symlinked_dir_followed_when_enabled() {
    let dir = tempdir().unwrap();
    let outside = tempdir().unwrap();
    fs::write(outside.path().join("ext.txt"), "external").unwrap();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("linked")).unwrap();
    let skipped = run(ScanBuilder::new(dir.path()).build());
    assert!(!skipped.text.contains("ext.txt"));
    let followed = run(ScanBuilder::new(dir.path()).follow_symlinks(true).build());
    assert!(!tree_part(&followed).contains("linked"));
    assert!(files_part(&followed).contains("## File: linked/ext.txt\n```\nexternal\n```"));
}
