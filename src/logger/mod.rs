//! Logger module
//!
//! Provides logging utilities for the stub server including:
//! - Server lifecycle logging
//! - Request, body, and JSON dump logging
//! - Access logging with multiple formats
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use hyper::header::HeaderMap;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    if writer::is_initialized() {
        writer::get().write_access(message);
    } else {
        println!("{message}");
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Async server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Serving GET {} from file: {}",
        config.endpoint_path(),
        config.resource.file
    ));
    write_info(&format!(
        "Accepting POST {} (bodies are dumped, never stored)",
        config.endpoint_path()
    ));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("Using Tokio runtime for concurrency");
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    write_info(&format!("[Request] {method} {uri} {version:?}"));
}

pub fn log_request_headers(headers: &HeaderMap, show: bool) {
    if !show {
        return;
    }
    write_info(&format!("[Headers] Count: {}", headers.len()));
    for (name, value) in headers {
        write_info(&format!("  {name}: {}", value.to_str().unwrap_or("<binary>")));
    }
}

/// Log the payload about to be served from the configured file.
pub fn log_sending(payload: &[u8]) {
    write_info(&format!(
        "[Sending] {} bytes:\n{}",
        payload.len(),
        String::from_utf8_lossy(payload)
    ));
}

/// Log the raw body of an inbound POST request.
pub fn log_request_body(payload: &[u8]) {
    write_info(&format!(
        "[Body] {} bytes:\n{}",
        payload.len(),
        String::from_utf8_lossy(payload)
    ));
}

/// Log the rendered key/value dump of a decoded JSON object.
pub fn log_json_dump(rendered: &str) {
    write_info(&format!("[Dump] Decoded JSON object:\n{rendered}"));
}

/// Decode failure never fails the request; it is only recorded here.
pub fn log_decode_failure(err: &serde_json::Error) {
    write_error(&format!("[WARN] Failed to decode JSON body: {err}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// An unreadable configured file is a startup/configuration defect, not a
/// per-request condition.
pub fn log_fatal(message: &str) {
    write_error(&format!("[FATAL] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}
