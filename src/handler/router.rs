//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: route resolution, content
//! extraction, rendering and access logging.

use super::content;
use super::route::{self, Route};
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::qr::Format;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::header::{REFERER, USER_AGENT};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of reading a request body
enum BodyRead {
    Complete(Bytes),
    TooLarge,
    /// Connection-level read failure, treated like a malformed body
    Failed,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let started = Instant::now();
    let http_config = &state.config.http;

    let mut entry = state.config.logging.access_log.then(|| {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = format_version(req.version());
        entry.referer = header_string(&req, REFERER);
        entry.user_agent = header_string(&req, USER_AGENT);
        entry
    });

    let mut response = dispatch(req, &state).await;
    http::apply_common_headers(
        &mut response,
        &http_config.server_name,
        http_config.enable_cors,
    );

    if let Some(entry) = entry.as_mut() {
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
            .unwrap_or(usize::MAX);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Resolve the route and produce its response
async fn dispatch<B>(req: Request<B>, state: &Arc<AppState>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let http_config = &state.config.http;
    let route = route::resolve(req.method(), req.uri().path(), http_config.enable_cors);

    match route {
        Route::Landing => http::build_html_response(state.landing_page.clone()),
        Route::NotFound => http::build_404_response(),
        Route::Preflight => http::build_options_response(),
        Route::MethodNotAllowed => {
            logger::log_warning(&format!("Method not allowed: {}", req.method()));
            http::build_405_response(http_config.enable_cors)
        }
        Route::Render(format) => {
            let content = if *req.method() == Method::POST {
                if let Some(resp) = check_body_size(&req, http_config.max_body_size) {
                    return resp;
                }
                match read_body(req.into_body(), http_config.max_body_size).await {
                    BodyRead::Complete(body) => content::text_from_json(&body),
                    BodyRead::TooLarge => return http::build_413_response(),
                    BodyRead::Failed => String::new(),
                }
            } else {
                content::text_from_query(req.uri().query())
            };
            render(state, format, content).await
        }
    }
}

/// Render `content`; PNG rasterization runs on the blocking pool
async fn render(state: &Arc<AppState>, format: Format, content: String) -> Response<Full<Bytes>> {
    let content_len = content.len();
    let result = if format == Format::Png {
        let state = Arc::clone(state);
        match tokio::task::spawn_blocking(move || state.renderer.render(format, &content)).await {
            Ok(result) => result,
            Err(e) => {
                logger::log_error(&format!("PNG render task failed: {e}"));
                return http::build_500_response();
            }
        }
    } else {
        state.renderer.render(format, &content)
    };

    match result {
        Ok(rendered) => http::build_rendered_response(rendered),
        Err(e) => {
            logger::log_render_failure(format, content_len, &e);
            http::build_500_response()
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Collect the body, enforcing the size limit for bodies without a length
async fn read_body<B>(body: B, max_body_size: u64) -> BodyRead
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    match Limited::new(body, limit).collect().await {
        Ok(collected) => BodyRead::Complete(collected.to_bytes()),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            logger::log_error(&format!("Request body exceeded {max_body_size} bytes"));
            BodyRead::TooLarge
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            BodyRead::Failed
        }
    }
}

fn header_string<B>(req: &Request<B>, name: hyper::header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn format_version(version: Version) -> String {
    let version = if version == Version::HTTP_09 {
        "0.9"
    } else if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else if version == Version::HTTP_3 {
        "3"
    } else {
        "1.1"
    };
    version.to_string()
}
