// Application state module
// Holds everything a request handler needs, shared read-only across connections

use super::types::Config;
use crate::handler::landing;
use crate::qr::Renderer;

/// Application state
pub struct AppState {
    pub config: Config,
    pub renderer: Renderer,
    /// Landing page markup, rendered once from the configured default text
    pub landing_page: String,
}

impl AppState {
    /// Build state from the loaded configuration
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            renderer: Renderer::new(config.qr.clone()),
            landing_page: landing::render(&config.qr.default_text),
        }
    }
}
