//! SVG markup for a QR matrix
//!
//! One background `<rect>` plus one `<rect>` per dark module, laid out on a
//! fixed canvas with a quiet zone. Modules are addressed as `modules[x][y]`
//! (first index is the matrix row), matching the ASCII renderer.

use super::matrix::QrMatrix;
use crate::config::QrConfig;

const EOL: &str = "\r\n";

/// Render `matrix` using the canvas size, padding and colors in `style`
#[allow(clippy::cast_precision_loss)]
pub fn render(matrix: &QrMatrix, style: &QrConfig) -> String {
    let length = matrix.size();
    let cells = (length + 2 * style.padding as usize) as f64;
    let xsize = f64::from(style.width) / cells;
    let ysize = f64::from(style.height) / cells;
    let padding = f64::from(style.padding);

    let mut svg = String::with_capacity(128 + matrix.dark_count() * 96);
    svg.push_str("<?xml version=\"1.0\" standalone=\"yes\"?>");
    svg.push_str(EOL);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{}\" height=\"{}\">{EOL}",
        style.width, style.height
    ));
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" style=\"fill:{};shape-rendering:crispEdges;\"/>{EOL}",
        style.width, style.height, style.background
    ));

    for y in 0..length {
        for x in 0..length {
            if !matrix.is_dark(x, y) {
                continue;
            }
            let px = (x as f64).mul_add(xsize, padding * xsize);
            let py = (y as f64).mul_add(ysize, padding * ysize);
            svg.push_str(&format!(
                "<rect x=\"{px}\" y=\"{py}\" width=\"{xsize}\" height=\"{ysize}\" style=\"fill:{};shape-rendering:crispEdges;\"/>{EOL}",
                style.color
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}
