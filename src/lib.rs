//! QR code web server
//!
//! Turns text into a QR code served as ASCII, SVG, PNG or an SVG data URL,
//! with the output format chosen by the first path segment.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod qr;
pub mod server;
