//! Error types for QR rendering.

use thiserror::Error;

/// Failure inside the QR encoder or the rasterizer.
#[derive(Error, Debug)]
pub enum QrError {
    /// Content does not fit in the largest QR symbol.
    #[error("Content too long to encode: {0}")]
    DataTooLong(#[from] qrcodegen::DataTooLong),

    /// Generated SVG markup was rejected by the SVG parser.
    #[error("Invalid SVG markup: {0}")]
    Svg(#[from] resvg::usvg::Error),

    /// The raster canvas could not be allocated.
    #[error("Cannot allocate a {width}x{height} raster")]
    Pixmap {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
    },

    /// PNG encoding of the raster failed.
    #[error("PNG encoding failed: {message}")]
    PngEncode {
        /// Encoder error message.
        message: String,
    },

    /// The raster converter was used before `raster::init`.
    #[error("Raster converter used before initialization")]
    RasterUninitialized,
}

/// Result type alias using [`QrError`].
pub type Result<T> = std::result::Result<T, QrError>;
