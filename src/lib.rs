//! # Repomap
//!
//! `repomap` walks a directory tree and produces one text document made of an
//! ASCII rendering of the tree followed by the contents of every eligible text
//! file, each in a fenced block whose fence can never collide with the content.
//! The result is meant to be pasted into a prompt or a document.
//!
//! Both the tree and the content export apply the same ignore rules: a
//! built-in directory denylist plus caller-supplied names, a hidden-entry
//! policy, and optionally the root `.gitignore`. Content export additionally
//! drops symlinks (unless followed), binary files, and files above a size
//! limit, and can stop early once the document exceeds a character budget.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//! - `clipboard`: Enables copying the document to the system clipboard with `arboard`.
//!
//! # Example
//!
//! ```no_run
//! use repomap::{ScanBuilder, assemble};
//!
//! let config = ScanBuilder::new(".")
//!     .respect_gitignore(true)
//!     .ignore_dir("fixtures")
//!     .max_output_chars(200_000)
//!     .build();
//!
//! let doc = assemble(&config).expect("Failed to map directory");
//!
//! println!("{}", doc.text);
//! eprintln!("{} files, {} characters", doc.files_exported, doc.total_chars);
//! ```

pub mod classify;
pub mod clipboard;
mod engine;
mod error;
mod options;
pub mod output;
pub mod reader;
pub mod rules;
pub mod tree;
mod types;
pub mod walk;

pub use engine::{assemble, assemble_with};
pub use error::RepomapError;
pub use options::{
    DEFAULT_CLIPBOARD_MAX_CHARS, DEFAULT_MAX_FILE_BYTES, EolMode, ScanBuilder, ScanConfig,
};
pub use types::{Document, ExportedFile, FileEntry};
