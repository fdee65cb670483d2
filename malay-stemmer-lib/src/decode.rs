// Reading input text under a list of candidate encodings.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// A text encoding the reader can try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    /// ISO-8859-1. Every byte is valid, so this always succeeds.
    Latin1,
}

/// Tried in order; the first encoding that accepts the bytes wins.
pub const DEFAULT_ENCODINGS: &[Encoding] = &[Encoding::Utf8, Encoding::Latin1];

impl Encoding {
    /// Decode `bytes`, or `None` if they are not valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => {
                let text = std::str::from_utf8(bytes).ok()?;
                // Drop a leading byte-order mark.
                Some(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
            }
            Encoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("utf-8"),
            Encoding::Latin1 => f.write_str("latin-1"),
        }
    }
}

/// Text read from disk and the encoding that decoded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: Encoding,
}

/// Read `path` with [`DEFAULT_ENCODINGS`].
pub fn read_text(path: &Path) -> Result<DecodedText> {
    read_text_with(path, DEFAULT_ENCODINGS)
}

/// Read `path`, trying each encoding in `encodings` in order.
pub fn read_text_with(path: &Path, encodings: &[Encoding]) -> Result<DecodedText> {
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;

    for (i, &encoding) in encodings.iter().enumerate() {
        if let Some(text) = encoding.decode(&bytes) {
            if i > 0 {
                tracing::warn!(path = %path.display(), %encoding, "input is not {}", encodings[0]);
            }
            tracing::info!(path = %path.display(), %encoding, "read input");
            return Ok(DecodedText { text, encoding });
        }
        tracing::debug!(path = %path.display(), %encoding, "decoding failed");
    }

    Err(Error::Undecodable(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f
    }

    #[test]
    fn test_read_utf8() {
        let f = temp_file("kerajaan Melaka".as_bytes());
        let decoded = read_text(f.path()).unwrap();
        assert_eq!(decoded.encoding, Encoding::Utf8);
        assert_eq!(decoded.text, "kerajaan Melaka");
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let f = temp_file(b"\xef\xbb\xbfraja");
        assert_eq!(read_text(f.path()).unwrap().text, "raja");
    }

    #[test]
    fn test_latin1_fallback() {
        // 0xE9 alone is not valid UTF-8.
        let f = temp_file(b"caf\xe9");
        let decoded = read_text(f.path()).unwrap();
        assert_eq!(decoded.encoding, Encoding::Latin1);
        assert_eq!(decoded.text, "café");
    }

    #[test]
    fn test_undecodable() {
        let f = temp_file(b"caf\xe9");
        let err = read_text_with(f.path(), &[Encoding::Utf8]).unwrap_err();
        assert!(matches!(err, Error::Undecodable(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }

    #[test]
    fn test_encoding_display() {
        assert_eq!(Encoding::Utf8.to_string(), "utf-8");
        assert_eq!(Encoding::Latin1.to_string(), "latin-1");
    }
}
