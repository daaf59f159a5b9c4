//! HTTP protocol layer module
//!
//! Response builders shared by the request handler, decoupled from QR logic.

pub mod response;

// Re-export commonly used types
pub use response::{
    apply_common_headers, build_404_response, build_405_response, build_413_response,
    build_500_response, build_html_response, build_options_response, build_rendered_response,
};
