//! Route resolution
//!
//! Maps method and first path segment onto a closed set of routes.

use crate::qr::Format;
use hyper::Method;

/// Where a request goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    Landing,
    Render(Format),
    /// `GET` with an unknown segment
    NotFound,
    /// CORS preflight, only routed when CORS is enabled
    Preflight,
    MethodNotAllowed,
}

/// Text between the first two slashes: `/png/x` -> `png`, `/` -> ``
pub fn first_segment(path: &str) -> &str {
    path.split('/').nth(1).unwrap_or("")
}

/// Resolve a route
///
/// POST falls back to SVG for every segment other than `ascii` and `png`,
/// while GET only answers the five known segments.
pub fn resolve(method: &Method, path: &str, enable_cors: bool) -> Route {
    let segment = first_segment(path);
    match *method {
        Method::POST => match segment {
            "ascii" => Route::Render(Format::Ascii),
            "png" => Route::Render(Format::Png),
            _ => Route::Render(Format::Svg),
        },
        Method::GET => match segment {
            "" => Route::Landing,
            "ascii" => Route::Render(Format::Ascii),
            "dataurl" => Route::Render(Format::DataUrl),
            "png" => Route::Render(Format::Png),
            "svg" => Route::Render(Format::Svg),
            _ => Route::NotFound,
        },
        Method::OPTIONS if enable_cors => Route::Preflight,
        _ => Route::MethodNotAllowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_segment() {
        assert_eq!(first_segment("/"), "");
        assert_eq!(first_segment(""), "");
        assert_eq!(first_segment("/ascii"), "ascii");
        assert_eq!(first_segment("/png/extra/parts"), "png");
        assert_eq!(first_segment("//svg"), "");
    }

    #[test]
    fn test_get_routes() {
        let get = |p| resolve(&Method::GET, p, false);
        assert_eq!(get("/"), Route::Landing);
        assert_eq!(get("/ascii"), Route::Render(Format::Ascii));
        assert_eq!(get("/dataurl"), Route::Render(Format::DataUrl));
        assert_eq!(get("/png"), Route::Render(Format::Png));
        assert_eq!(get("/svg"), Route::Render(Format::Svg));
        assert_eq!(get("/svg/anything"), Route::Render(Format::Svg));
        assert_eq!(get("/foo"), Route::NotFound);
        assert_eq!(get("/SVG"), Route::NotFound);
    }

    #[test]
    fn test_post_falls_back_to_svg() {
        let post = |p| resolve(&Method::POST, p, false);
        assert_eq!(post("/ascii"), Route::Render(Format::Ascii));
        assert_eq!(post("/png"), Route::Render(Format::Png));
        assert_eq!(post("/"), Route::Render(Format::Svg));
        assert_eq!(post("/svg"), Route::Render(Format::Svg));
        assert_eq!(post("/dataurl"), Route::Render(Format::Svg));
        assert_eq!(post("/foo"), Route::Render(Format::Svg));
    }

    #[test]
    fn test_other_methods() {
        assert_eq!(resolve(&Method::PUT, "/svg", false), Route::MethodNotAllowed);
        assert_eq!(resolve(&Method::DELETE, "/", false), Route::MethodNotAllowed);
        assert_eq!(resolve(&Method::HEAD, "/", false), Route::MethodNotAllowed);
        assert_eq!(resolve(&Method::OPTIONS, "/svg", false), Route::MethodNotAllowed);
        assert_eq!(resolve(&Method::OPTIONS, "/svg", true), Route::Preflight);
    }
}
