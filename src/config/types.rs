// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub qr: QrConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads (CPU cores when unset)
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit log lines as JSON objects
    pub json: bool,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Upper bound for a whole connection, in seconds
    pub connection_timeout: u64,
    #[serde(default)]
    pub max_connections: Option<u64>,
    /// Seconds to wait for in-flight connections on shutdown
    pub shutdown_grace: u64,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// QR rendering configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct QrConfig {
    /// Content encoded when a request carries no text
    pub default_text: String,
    pub width: u32,
    pub height: u32,
    /// Quiet zone, in modules
    pub padding: u32,
    pub color: String,
    pub background: String,
    /// Populate the rasterizer font database from the host
    pub load_system_fonts: bool,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            default_text: super::DEFAULT_TEXT.to_string(),
            width: 256,
            height: 256,
            padding: 4,
            color: "#000000".to_string(),
            background: "#ffffff".to_string(),
            load_system_fonts: false,
        }
    }
}
