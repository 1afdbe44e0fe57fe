//! Reads file contents as text, rejecting binary data and falling back
//! through a chain of encodings.

use crate::classify::{PROBE_LEN, is_probably_binary};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A text encoding tried during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// BOM-detected; little-endian when no BOM is present.
    Utf16,
    /// Single-byte; never fails.
    Latin1,
}

impl TextEncoding {
    /// Strict decode. `None` on any invalid sequence.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes.to_vec()).ok(),
            TextEncoding::Utf16 => decode_utf16(bytes),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    /// Decode that substitutes U+FFFD for invalid input.
    pub fn decode_lossy(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf16 => {
                let (units, _) = utf16_units(bytes);
                char::decode_utf16(units)
                    .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
                    .collect()
            }
            other => other
                .decode(bytes)
                .unwrap_or_else(|| String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

fn utf16_units(bytes: &[u8]) -> (Vec<u16>, bool) {
    let (body, big_endian) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };
    let units = body
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    (units, body.len() % 2 == 0)
}

fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (units, even) = utf16_units(bytes);
    if !even {
        return None;
    }
    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}

/// Probes, then decodes whole files.
#[derive(Debug, Clone)]
pub struct ContentReader {
    probe_len: usize,
    encodings: Vec<TextEncoding>,
}

impl Default for ContentReader {
    fn default() -> Self {
        Self {
            probe_len: PROBE_LEN,
            encodings: vec![TextEncoding::Utf8, TextEncoding::Utf16, TextEncoding::Latin1],
        }
    }
}

impl ContentReader {
    /// Reader with a custom encoding chain. The first entry is also the lossy
    /// last resort; an empty chain behaves as lossy UTF-8.
    pub fn with_encodings(encodings: Vec<TextEncoding>) -> Self {
        Self {
            encodings,
            ..Default::default()
        }
    }

    /// Returns the decoded text, or `None` for binary or unreadable files.
    ///
    /// End-of-line markers are returned untouched.
    pub fn read(&self, path: &Path) -> Option<String> {
        match self.read_text_bytes(path) {
            Ok(Some(bytes)) => Some(self.decode(&bytes, path)),
            Ok(None) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Binary content detected: {}", path.display());
                None
            }
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Unreadable file {}: {}", path.display(), _e);
                None
            }
        }
    }

    /// Reads the probe chunk, and the remainder only when the probe is text.
    fn read_text_bytes(&self, path: &Path) -> std::io::Result<Option<Vec<u8>>> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let mut bytes = Vec::with_capacity(self.probe_len);
        reader
            .by_ref()
            .take(self.probe_len as u64)
            .read_to_end(&mut bytes)?;
        if is_probably_binary(&bytes) {
            return Ok(None);
        }
        reader.read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }

    fn decode(&self, bytes: &[u8], _path: &Path) -> String {
        for encoding in &self.encodings {
            if let Some(text) = encoding.decode(bytes) {
                return text;
            }
            #[cfg(feature = "logging")]
            tracing::debug!("{:?} decode failed for {}", encoding, _path.display());
        }
        let first = self.encodings.first().copied().unwrap_or(TextEncoding::Utf8);
        first.decode_lossy(bytes)
    }
}
