//! Access log format module
//!
//! Supports multiple log formats:
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format - CLF)
//! - `json` (JSON structured logging)

use chrono::Local;

/// Access log entry, filled in by the router as the request completes
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1, 2.0)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
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

    /// Format the log entry according to the specified format
    ///
    /// Unknown format names fall back to `combined`.
    pub fn format(&self, format: &str) -> String {
        match format {
            "common" => self.format_common(),
            "json" => self.format_json(),
            _ => self.format_combined(),
        }
    }

    /// The quoted `"$request"` portion shared by combined and common
    fn request_line(&self) -> String {
        format!(
            "{} {}{} HTTP/{}",
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
        )
    }

    /// Apache/Nginx Combined Log Format
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    /// JSON structured log format
    fn format_json(&self) -> String {
        serde_json::json!({
            "remote_addr": &self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": &self.method,
            "path": &self.path,
            "query": &self.query,
            "http_version": &self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": &self.referer,
            "user_agent": &self.user_agent,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.10".to_string(),
            "GET".to_string(),
            "/data".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 9;
        entry.user_agent = Some("curl/8.0".to_string());
        entry
    }

    #[test]
    fn test_combined_format() {
        let line = sample_entry().format("combined");
        assert!(line.starts_with("192.168.1.10 - - ["));
        assert!(line.contains("\"GET /data HTTP/1.1\" 200 9"));
        assert!(line.ends_with("\"-\" \"curl/8.0\""));
    }

    #[test]
    fn test_common_format() {
        let line = sample_entry().format("common");
        assert!(line.contains("\"GET /data HTTP/1.1\" 200 9"));
        assert!(!line.contains("curl/8.0"));
    }

    #[test]
    fn test_query_string_is_appended() {
        let mut entry = sample_entry();
        entry.query = Some("verbose=1".to_string());
        let line = entry.format("common");
        assert!(line.contains("\"GET /data?verbose=1 HTTP/1.1\""));
    }

    #[test]
    fn test_json_format_is_parseable() {
        let line = sample_entry().format("json");
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["remote_addr"], "192.168.1.10");
        assert_eq!(value["status"], 200);
        assert_eq!(value["body_bytes"], 9);
        assert_eq!(value["referer"], serde_json::Value::Null);
    }

    #[test]
    fn test_unknown_format_falls_back_to_combined() {
        let entry = sample_entry();
        assert_eq!(entry.format("bogus"), entry.format("combined"));
    }
}
