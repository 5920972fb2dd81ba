// Configuration module
// Loads the process configuration once at startup and hands it to the
// router and server constructors; there is no runtime reconfiguration.

use serde::Deserialize;
use std::net::SocketAddr;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub resource: ResourceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    pub show_headers: bool,
    /// Access log format (combined, common, or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// The served resource: one endpoint name, one file behind it
#[derive(Debug, Deserialize, Clone)]
pub struct ResourceConfig {
    pub endpoint: String,
    pub file: String,
}

impl Config {
    /// Load configuration from the default `config` file location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    ///
    /// The file is optional; the coded defaults alone describe the stock
    /// deployment (`0.0.0.0:3080`, endpoint `data`, file `data.json`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3080)?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("resource.endpoint", "data")?
            .set_default("resource.file", "data.json")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Path under which both operations are exposed: the root separator
    /// joined with the configured endpoint name.
    pub fn endpoint_path(&self) -> String {
        format!("/{}", self.resource.endpoint.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(endpoint: &str) -> Config {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3080,
                workers: None,
            },
            logging: LoggingConfig {
                access_log: true,
                show_headers: false,
                access_log_format: "combined".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            resource: ResourceConfig {
                endpoint: endpoint.to_string(),
                file: "data.json".to_string(),
            },
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3080);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.resource.endpoint, "data");
        assert_eq!(cfg.resource.file, "data.json");
        assert!(cfg.logging.access_log);
        assert!(!cfg.logging.show_headers);
        assert_eq!(cfg.logging.access_log_format, "combined");
    }

    #[test]
    fn test_socket_addr() {
        let cfg = base_config("data");
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "0.0.0.0:3080");
    }

    #[test]
    fn test_endpoint_path_joins_root() {
        assert_eq!(base_config("data").endpoint_path(), "/data");
    }

    #[test]
    fn test_endpoint_path_tolerates_leading_slash() {
        assert_eq!(base_config("/data").endpoint_path(), "/data");
    }
}
