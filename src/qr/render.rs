//! Format renderers
//!
//! Each renderer resolves the content (empty means the configured default),
//! encodes it and produces a payload plus its content type.

use super::matrix::QrMatrix;
use super::raster;
use super::svg;
use crate::config::QrConfig;
use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hyper::body::Bytes;

pub const TEXT_PLAIN: &str = "text/plain";
pub const IMAGE_SVG: &str = "image/svg+xml";
pub const IMAGE_PNG: &str = "image/png";

const DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Output representations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ascii,
    Svg,
    Png,
    DataUrl,
}

impl Format {
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Ascii | Self::DataUrl => TEXT_PLAIN,
            Self::Svg => IMAGE_SVG,
            Self::Png => IMAGE_PNG,
        }
    }
}

/// Rendered payload ready to become a response body
#[derive(Debug, Clone)]
pub struct Rendered {
    pub body: Bytes,
    pub content_type: &'static str,
}

/// Stateless renderer bound to a style
///
/// PNG output goes through the process raster converter, which must have
/// been set up with [`raster::init`].
pub struct Renderer {
    style: QrConfig,
}

impl Renderer {
    pub const fn new(style: QrConfig) -> Self {
        Self { style }
    }

    /// Content actually encoded for a request carrying `content`
    pub fn resolve_content<'a>(&'a self, content: &'a str) -> &'a str {
        if content.is_empty() {
            &self.style.default_text
        } else {
            content
        }
    }

    pub fn render(&self, format: Format, content: &str) -> Result<Rendered> {
        let body = match format {
            Format::Ascii => Bytes::from(self.ascii(content)?),
            Format::Svg => Bytes::from(self.svg(content)?),
            Format::Png => Bytes::from(self.png(content)?),
            Format::DataUrl => Bytes::from(self.data_url(content)?),
        };
        Ok(Rendered {
            body,
            content_type: format.content_type(),
        })
    }

    pub fn ascii(&self, content: &str) -> Result<String> {
        let matrix = QrMatrix::encode(self.resolve_content(content))?;
        Ok(ascii_art(&matrix))
    }

    pub fn svg(&self, content: &str) -> Result<String> {
        let matrix = QrMatrix::encode(self.resolve_content(content))?;
        Ok(svg::render(&matrix, &self.style))
    }

    pub fn data_url(&self, content: &str) -> Result<String> {
        let svg = self.svg(content)?;
        Ok(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(svg)))
    }

    pub fn png(&self, content: &str) -> Result<Vec<u8>> {
        let svg = self.svg(content)?;
        raster::get()?.svg_to_png_on_white(&svg)
    }
}

/// `'x'` for dark, `' '` for light, rows terminated by CRLF
///
/// Row `y` column `x` shows `modules[x][y]`, i.e. the matrix transposed,
/// the same orientation the SVG markup uses.
fn ascii_art(matrix: &QrMatrix) -> String {
    let length = matrix.size();
    let mut ascii = String::with_capacity(length * (length + 2));
    for y in 0..length {
        for x in 0..length {
            ascii.push(if matrix.is_dark(x, y) { 'x' } else { ' ' });
        }
        ascii.push_str("\r\n");
    }
    ascii
}
