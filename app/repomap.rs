//! Command-line interface for repomap.
//!
//! Maps a directory into a single document and writes it to a file, stdout,
//! and optionally the system clipboard.

use clap::{Parser, ValueEnum};
use repomap::clipboard::{ClipboardOutcome, ClipboardSink, copy_capped, system_clipboard};
use repomap::output::normalize_eol;
use repomap::{
    DEFAULT_CLIPBOARD_MAX_CHARS, DEFAULT_MAX_FILE_BYTES, EolMode, RepomapError, ScanBuilder,
    ScanConfig, assemble,
};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

const DEFAULT_OUTPUT_NAME: &str = "repo_dump.md";

/// repomap — map a repository to text (tree + files)
#[derive(Parser)]
#[command(name = "repomap", version, about, long_about = None)]
struct Cli {
    /// Repository root path
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file path (default <root>/repo_dump.md)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Include hidden files and directories
    #[arg(long)]
    include_hidden: bool,

    /// Respect the root .gitignore
    #[arg(long)]
    respect_gitignore: bool,

    /// Directory name to ignore (can be repeated)
    #[arg(long = "ignore-dir")]
    ignore_dirs: Vec<String>,

    /// Max individual file size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_BYTES)]
    max_file_bytes: u64,

    /// Max output length in characters (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_output_chars: usize,

    /// Follow symlinks
    #[arg(long)]
    follow_symlinks: bool,

    /// Copy output to the clipboard
    #[arg(long)]
    to_clipboard: bool,

    /// Max characters allowed for a clipboard copy
    #[arg(long, default_value_t = DEFAULT_CLIPBOARD_MAX_CHARS)]
    clipboard_max_chars: usize,

    /// Line endings for output
    #[arg(long, value_enum, default_value_t = Eol::Lf)]
    eol: Eol,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Eol {
    Lf,
    Crlf,
    Platform,
}

impl From<Eol> for EolMode {
    fn from(eol: Eol) -> Self {
        match eol {
            Eol::Lf => EolMode::Lf,
            Eol::Crlf => EolMode::Crlf,
            Eol::Platform => EolMode::Platform,
        }
    }
}

struct Sinks {
    output: Option<PathBuf>,
    stdout: bool,
    to_clipboard: bool,
}

impl Cli {
    fn into_config(self) -> Result<(ScanConfig, Sinks), RepomapError> {
        let root = fs::canonicalize(&self.path).map_err(|source| RepomapError::Io {
            path: self.path.clone(),
            source,
        })?;
        let config = ScanBuilder::new(root)
            .include_hidden(self.include_hidden)
            .respect_gitignore(self.respect_gitignore)
            .ignore_dirs(self.ignore_dirs)
            .max_file_bytes(self.max_file_bytes)
            .max_output_chars(self.max_output_chars)
            .follow_symlinks(self.follow_symlinks)
            .clipboard_max_chars(self.clipboard_max_chars)
            .eol(self.eol.into())
            .build();
        let sinks = Sinks {
            output: self.output,
            stdout: self.stdout,
            to_clipboard: self.to_clipboard,
        };
        Ok((config, sinks))
    }
}

fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("repomap=info"));
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(filter)
            .init();
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RepomapError> {
    let (config, sinks) = cli.into_config()?;
    let doc = assemble(&config)?;
    let out_text = normalize_eol(&doc.text, config.eol);

    if !sinks.stdout {
        let out_path = sinks
            .output
            .unwrap_or_else(|| config.root.join(DEFAULT_OUTPUT_NAME));
        fs::write(&out_path, out_text.as_bytes()).map_err(|source| RepomapError::Io {
            path: out_path.clone(),
            source,
        })?;
        println!("Export written to: {}", out_path.display());
    }

    if sinks.to_clipboard {
        let mut clipboard = system_clipboard();
        let sink = clipboard
            .as_mut()
            .map(|cb| cb.as_mut() as &mut dyn ClipboardSink);
        match copy_capped(sink, &doc.text, config.clipboard_max_chars)? {
            ClipboardOutcome::Copied => println!("Copied to clipboard."),
            ClipboardOutcome::TooLarge { .. } => {
                println!("Output too large for clipboard, not copied.")
            }
            ClipboardOutcome::Unavailable => {
                println!("Clipboard support is unavailable; not copied.")
            }
        }
    }

    if sinks.stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(out_text.as_bytes())
            .and_then(|_| handle.flush())
            .map_err(|source| RepomapError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
    }
    Ok(())
}
