//! QR code module
//!
//! Encoding (`qrcodegen`), SVG markup, rasterization (`resvg`) and the four
//! output formats built on top of them.

pub mod matrix;
pub mod raster;
pub mod render;
pub mod svg;

// Re-export commonly used types
pub use matrix::QrMatrix;
pub use render::{Format, Rendered, Renderer};
