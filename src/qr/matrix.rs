//! QR module matrix
//!
//! Wraps the `qrcodegen` encoder behind a small owned grid type.

use crate::error::Result;
use qrcodegen::{QrCode, QrCodeEcc, QrSegment, Version};

/// Square grid of dark/light modules, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Encode `text` as a byte-mode symbol at medium error correction
    ///
    /// The level is never boosted, so the output depends on the input only.
    pub fn encode(text: &str) -> Result<Self> {
        let segments = [QrSegment::make_bytes(text.as_bytes())];
        let code = QrCode::encode_segments_advanced(
            &segments,
            QrCodeEcc::Medium,
            Version::MIN,
            Version::MAX,
            None,
            false,
        )?;

        let side = code.size();
        let code = &code;
        let modules = (0..side)
            .flat_map(|row| (0..side).map(move |col| code.get_module(col, row)))
            .collect();

        Ok(Self {
            size: usize::try_from(side).unwrap_or_default(),
            modules,
        })
    }

    /// Number of modules per side
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at (`row`, `col`) is dark; out of range is light
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.modules[row * self.size + col]
    }

    /// Number of dark modules in the symbol
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|m| **m).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_finder_at(matrix: &QrMatrix, top: usize, left: usize) {
        // 7x7 ring with a 3x3 core
        for i in 0..7 {
            assert!(matrix.is_dark(top, left + i));
            assert!(matrix.is_dark(top + 6, left + i));
            assert!(matrix.is_dark(top + i, left));
            assert!(matrix.is_dark(top + i, left + 6));
        }
        assert!(!matrix.is_dark(top + 1, left + 1));
        assert!(matrix.is_dark(top + 3, left + 3));
    }

    #[test]
    fn test_encode_is_square_and_valid_size() {
        let matrix = QrMatrix::encode("https://vnl.pages.dev/").unwrap();
        let size = matrix.size();
        assert!(size >= 21);
        assert_eq!((size - 17) % 4, 0);
        assert!(matrix.dark_count() > 0);
    }

    #[test]
    fn test_finder_patterns() {
        let matrix = QrMatrix::encode("hello").unwrap();
        let last = matrix.size() - 7;
        assert_finder_at(&matrix, 0, 0);
        assert_finder_at(&matrix, 0, last);
        assert_finder_at(&matrix, last, 0);
    }

    #[test]
    fn test_deterministic() {
        let a = QrMatrix::encode("same input").unwrap();
        let b = QrMatrix::encode("same input").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_longer_text_grows_symbol() {
        let short = QrMatrix::encode("a").unwrap();
        let long = QrMatrix::encode(&"a".repeat(500)).unwrap();
        assert!(long.size() > short.size());
    }

    #[test]
    fn test_too_long_fails() {
        assert!(QrMatrix::encode(&"x".repeat(4000)).is_err());
    }

    #[test]
    fn test_out_of_range_is_light() {
        let matrix = QrMatrix::encode("a").unwrap();
        assert!(!matrix.is_dark(matrix.size(), 0));
        assert!(!matrix.is_dark(0, matrix.size()));
    }
}
