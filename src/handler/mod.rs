//! Request handler module
//!
//! Responsible for request routing dispatch and QR rendering.

pub mod content;
pub mod landing;
pub mod route;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
