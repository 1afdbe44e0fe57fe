//! Clipboard transfer with a size cap.
//!
//! The backend is an injected [`ClipboardSink`]; with none available the
//! copy degrades to [`ClipboardOutcome::Unavailable`].

use crate::error::RepomapError;
use crate::options::EolMode;
use crate::output::normalize_eol;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), RepomapError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied,
    TooLarge { chars: usize, limit: usize },
    Unavailable,
}

/// Copies `text` with CRLF line endings if it fits in `max_chars`.
pub fn copy_capped(
    sink: Option<&mut dyn ClipboardSink>,
    text: &str,
    max_chars: usize,
) -> Result<ClipboardOutcome, RepomapError> {
    let Some(sink) = sink else {
        return Ok(ClipboardOutcome::Unavailable);
    };
    let clip = normalize_eol(text, EolMode::Crlf);
    let chars = clip.chars().count();
    if chars > max_chars {
        return Ok(ClipboardOutcome::TooLarge {
            chars,
            limit: max_chars,
        });
    }
    sink.set_text(&clip)?;
    Ok(ClipboardOutcome::Copied)
}

/// The OS clipboard through `arboard`.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self, RepomapError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| RepomapError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), RepomapError> {
        self.inner
            .set_text(text)
            .map_err(|e| RepomapError::Clipboard(e.to_string()))
    }
}

/// Opens the system clipboard when support is compiled in and a backend is
/// reachable.
pub fn system_clipboard() -> Option<Box<dyn ClipboardSink>> {
    #[cfg(feature = "clipboard")]
    {
        match SystemClipboard::new() {
            Ok(cb) => return Some(Box::new(cb)),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("System clipboard unavailable: {}", _e);
            }
        }
    }
    None
}
