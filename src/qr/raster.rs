//! SVG to PNG conversion
//!
//! The converter owns the font database `usvg` resolves text against. It is
//! built once per process by [`init`] and lives until exit; every request
//! borrows the same `&'static` instance.

use crate::error::{QrError, Result};
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::{self, fontdb};
use std::sync::{Arc, OnceLock};

/// Global converter instance
static RASTER: OnceLock<RasterConverter> = OnceLock::new();

/// Rasterizes SVG markup with `resvg`
pub struct RasterConverter {
    fontdb: Arc<fontdb::Database>,
}

impl RasterConverter {
    fn new(load_system_fonts: bool) -> Self {
        let mut db = fontdb::Database::new();
        if load_system_fonts {
            db.load_system_fonts();
        }
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Number of font faces available to the SVG parser
    pub fn font_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Render `svg` at its intrinsic size over a solid `background`
    pub fn svg_to_png(&self, svg: &str, background: Color) -> Result<Vec<u8>> {
        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(svg, &options)?;

        let size = tree.size().to_int_size();
        let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or(QrError::Pixmap {
            width: size.width(),
            height: size.height(),
        })?;
        pixmap.fill(background);
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        pixmap.encode_png().map_err(|e| QrError::PngEncode {
            message: e.to_string(),
        })
    }

    /// Render `svg` over white
    pub fn svg_to_png_on_white(&self, svg: &str) -> Result<Vec<u8>> {
        self.svg_to_png(svg, Color::WHITE)
    }
}

/// Initialize the global converter
///
/// Idempotent: concurrent or repeated calls observe the first instance and
/// later `load_system_fonts` values are ignored.
pub fn init(load_system_fonts: bool) -> &'static RasterConverter {
    RASTER.get_or_init(|| {
        let converter = RasterConverter::new(load_system_fonts);
        tracing::info!(fonts = converter.font_count(), "Raster converter initialized");
        converter
    })
}

/// Get the global converter, failing if [`init`] has not run
pub fn get() -> Result<&'static RasterConverter> {
    RASTER.get().ok_or(QrError::RasterUninitialized)
}
