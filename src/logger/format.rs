//! Access log format module
//!
//! Supports multiple log formats:
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format - CLF)
//! - `json` (one JSON object per request)
//! - Custom patterns with `$variables`

use chrono::{DateTime, Local};

const CLF_TIME: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Parsed `logging.access_log_format`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessLogFormat {
    Combined,
    Common,
    Json,
    Custom(String),
}

impl AccessLogFormat {
    pub fn parse(format: &str) -> Self {
        match format {
            "combined" => Self::Combined,
            "common" => Self::Common,
            "json" => Self::Json,
            custom => Self::Custom(custom.to_string()),
        }
    }
}

/// One served request
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    pub time: DateTime<Local>,
    pub method: String,
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1, 2)
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    /// Handling time in microseconds, rendering included
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Format according to a config string (see [`AccessLogFormat::parse`])
    pub fn format(&self, format: &str) -> String {
        self.render(&AccessLogFormat::parse(format))
    }

    pub fn render(&self, format: &AccessLogFormat) -> String {
        match format {
            AccessLogFormat::Combined => format!(
                "{} \"{}\" \"{}\"",
                self.render_common(),
                self.referer.as_deref().unwrap_or("-"),
                self.user_agent.as_deref().unwrap_or("-"),
            ),
            AccessLogFormat::Common => self.render_common(),
            AccessLogFormat::Json => self.render_json(),
            AccessLogFormat::Custom(pattern) => self.render_custom(pattern),
        }
    }

    /// Path plus query, as the client sent it
    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }

    fn request_line(&self) -> String {
        format!("{} {} HTTP/{}", self.method, self.request_uri(), self.http_version)
    }

    #[allow(clippy::cast_precision_loss)]
    fn request_time_secs(&self) -> f64 {
        self.request_time_us as f64 / 1_000_000.0
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn render_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format(CLF_TIME),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    fn render_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }

    /// Variables: `$remote_addr`, `$time_local`, `$time_iso8601`, `$request`,
    /// `$request_method`, `$request_uri`, `$request_time` (seconds, 3
    /// decimals), `$status`, `$body_bytes_sent`, `$http_referer`,
    /// `$http_user_agent`
    ///
    /// The pattern is scanned once; substituted values are never rescanned,
    /// so a `$` sent by the client stays literal. Unknown names are kept as is.
    fn render_custom(&self, pattern: &str) -> String {
        let mut line = String::with_capacity(pattern.len() * 2);
        let mut rest = pattern;
        while let Some(start) = rest.find('$') {
            line.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let name_len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..name_len];
            match self.variable(name) {
                Some(value) => line.push_str(&value),
                None => {
                    line.push('$');
                    line.push_str(name);
                }
            }
            rest = &after[name_len..];
        }
        line.push_str(rest);
        line
    }

    fn variable(&self, name: &str) -> Option<String> {
        let value = match name {
            "remote_addr" => self.remote_addr.clone(),
            "time_local" => self.time.format(CLF_TIME).to_string(),
            "time_iso8601" => self.time.to_rfc3339(),
            "request" => self.request_line(),
            "request_method" => self.method.clone(),
            "request_uri" => self.request_uri(),
            "request_time" => format!("{:.3}", self.request_time_secs()),
            "status" => self.status.to_string(),
            "body_bytes_sent" => self.body_bytes.to_string(),
            "http_referer" => self.referer.clone().unwrap_or_else(|| "-".to_string()),
            "http_user_agent" => self.user_agent.clone().unwrap_or_else(|| "-".to_string()),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_request() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "10.0.0.7".to_string(),
            "GET".to_string(),
            "/png".to_string(),
        );
        entry.query = Some("text=hello".to_string());
        entry.status = 200;
        entry.body_bytes = 2048;
        entry.referer = Some("http://localhost:8080/".to_string());
        entry.user_agent = Some("curl/8.5.0".to_string());
        entry.request_time_us = 2600;
        entry
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(AccessLogFormat::parse("combined"), AccessLogFormat::Combined);
        assert_eq!(AccessLogFormat::parse("common"), AccessLogFormat::Common);
        assert_eq!(AccessLogFormat::parse("json"), AccessLogFormat::Json);
        assert_eq!(
            AccessLogFormat::parse("$status"),
            AccessLogFormat::Custom("$status".to_string())
        );
    }

    #[test]
    fn test_combined() {
        let log = png_request().format("combined");
        assert!(log.starts_with("10.0.0.7 - - ["));
        assert!(log.contains("\"GET /png?text=hello HTTP/1.1\" 200 2048"));
        assert!(log.ends_with("\"http://localhost:8080/\" \"curl/8.5.0\""));
    }

    #[test]
    fn test_common_omits_headers() {
        let log = png_request().format("common");
        assert!(log.ends_with("\"GET /png?text=hello HTTP/1.1\" 200 2048"));
        assert!(!log.contains("curl"));
    }

    #[test]
    fn test_json_is_valid() {
        let log = png_request().format("json");
        let value: serde_json::Value = serde_json::from_str(&log).unwrap();
        assert_eq!(value["path"], "/png");
        assert_eq!(value["query"], "text=hello");
        assert_eq!(value["status"], 200);
        assert_eq!(value["body_bytes"], 2048);
    }

    #[test]
    fn test_json_missing_headers_are_null() {
        let entry = AccessLogEntry::new("::1".to_string(), "POST".to_string(), "/".to_string());
        let value: serde_json::Value = serde_json::from_str(&entry.format("json")).unwrap();
        assert!(value["referer"].is_null());
        assert!(value["query"].is_null());
    }

    #[test]
    fn test_custom() {
        let log = png_request().format("$request_method $request_uri $status $request_time [$request]");
        assert_eq!(log, "GET /png?text=hello 200 0.003 [GET /png?text=hello HTTP/1.1]");

        let entry = AccessLogEntry::new("::1".to_string(), "POST".to_string(), "/".to_string());
        assert_eq!(entry.format("$http_referer|$http_user_agent"), "-|-");
    }

    #[test]
    fn test_custom_does_not_expand_client_values() {
        let mut entry = AccessLogEntry::new(
            "10.0.0.7".to_string(),
            "GET".to_string(),
            "/ascii".to_string(),
        );
        entry.query = Some("text=$status$remote_addr".to_string());
        entry.user_agent = Some("$request_time".to_string());

        assert_eq!(entry.format("$request_uri"), "/ascii?text=$status$remote_addr");
        assert_eq!(
            entry.format("$status [$request] $http_user_agent"),
            "200 [GET /ascii?text=$status$remote_addr HTTP/1.1] $request_time"
        );
    }

    #[test]
    fn test_custom_keeps_unknown_variables() {
        let entry = AccessLogEntry::new("::1".to_string(), "GET".to_string(), "/".to_string());
        assert_eq!(entry.format("$nope $status $"), "$nope 200 $");
    }
}
