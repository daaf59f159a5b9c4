//! HTTP response building module
//!
//! Provides builders for the status codes the QR endpoint can answer with.

use crate::qr::Rendered;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, SERVER};
use hyper::Response;

/// Methods the endpoint answers
pub const ALLOWED_METHODS: &str = "GET, POST";
const ALLOWED_METHODS_CORS: &str = "GET, POST, OPTIONS";

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_text_error(404, "404 Not Found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let allow = if enable_cors {
        ALLOWED_METHODS_CORS
    } else {
        ALLOWED_METHODS
    };
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", allow)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    build_text_error(413, "413 Payload Too Large")
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_text_error(500, "500 Internal Server Error")
}

/// Build CORS preflight response
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", ALLOWED_METHODS_CORS)
        .header("Access-Control-Allow-Methods", ALLOWED_METHODS_CORS)
        .header("Access-Control-Allow-Headers", "Content-Type")
        .header("Access-Control-Max-Age", "86400")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the landing page response
pub fn build_html_response(content: String) -> Response<Full<Bytes>> {
    let content_length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response carrying a rendered QR code
pub fn build_rendered_response(rendered: Rendered) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", rendered.content_type)
        .header("Content-Length", rendered.body.len())
        .header("Cache-Control", "no-store")
        .body(Full::new(rendered.body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            build_500_response()
        })
}

/// Attach headers every response carries
pub fn apply_common_headers(
    response: &mut Response<Full<Bytes>>,
    server_name: &str,
    enable_cors: bool,
) {
    let headers = response.headers_mut();
    match HeaderValue::from_str(server_name) {
        Ok(value) => {
            headers.insert(SERVER, value);
        }
        Err(e) => crate::logger::log_warning(&format!("Invalid server name '{server_name}': {e}")),
    }
    if enable_cors {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }
}

fn build_text_error(status: u16, message: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(message)))
        .unwrap_or_else(|e| {
            log_build_error(message, &e);
            Response::new(Full::new(Bytes::from(message)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::render::IMAGE_SVG;

    #[test]
    fn test_error_statuses() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_413_response().status(), 413);
        assert_eq!(build_500_response().status(), 500);
        assert_eq!(build_options_response().status(), 204);
    }

    #[test]
    fn test_405_allow_header() {
        assert_eq!(build_405_response(false).headers()["Allow"], "GET, POST");
        assert_eq!(
            build_405_response(true).headers()["Allow"],
            "GET, POST, OPTIONS"
        );
    }

    #[test]
    fn test_rendered_response() {
        let resp = build_rendered_response(Rendered {
            body: Bytes::from_static(b"<svg/>"),
            content_type: IMAGE_SVG,
        });
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "image/svg+xml");
        assert_eq!(resp.headers()["Content-Length"], "6");
    }

    #[test]
    fn test_common_headers() {
        let mut resp = build_404_response();
        apply_common_headers(&mut resp, "qr-test", true);
        assert_eq!(resp.headers()["Server"], "qr-test");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");

        let mut resp = build_404_response();
        apply_common_headers(&mut resp, "bad\nname", false);
        assert!(resp.headers().get("Server").is_none());
        assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());
    }
}
