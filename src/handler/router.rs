//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: binds the configured endpoint
//! path to the GET and POST handlers, answers everything else with the
//! default 404/405 responses, and records one access-log entry per request.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};

use crate::config::Config;
use crate::handler::endpoints::{EchoJson, ServeFile};
use crate::handler::{Handler, HandlerError, HandlerOutcome};
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;

/// Immutable routing table built once from the startup configuration.
pub struct Router {
    endpoint_path: String,
    serve_file: ServeFile,
    echo_json: EchoJson,
    access_log: bool,
    show_headers: bool,
    access_log_format: String,
}

impl Router {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint_path: config.endpoint_path(),
            serve_file: ServeFile::new(config.resource.file.clone()),
            echo_json: EchoJson::new(),
            access_log: config.logging.access_log,
            show_headers: config.logging.show_headers,
            access_log_format: config.logging.access_log_format.clone(),
        }
    }

    /// Whether access logging is enabled.
    pub const fn access_log(&self) -> bool {
        self.access_log
    }

    /// Dispatch one request and record its access-log entry.
    pub async fn dispatch<B>(
        &self,
        req: Request<B>,
        peer_addr: SocketAddr,
    ) -> Result<Response<Full<Bytes>>, Infallible>
    where
        B: Body + Send,
        B::Data: Send,
        B::Error: std::fmt::Display,
    {
        let started = Instant::now();

        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.referer = header_value(&req, "referer");
        entry.user_agent = header_value(&req, "user-agent");

        if self.access_log {
            logger::log_request(req.method(), req.uri(), req.version());
        }
        logger::log_request_headers(req.headers(), self.show_headers);

        let outcome = self.route(req).await;

        if let Some(err) = &outcome.error {
            match err {
                HandlerError::FileRead { .. } => logger::log_fatal(&err.to_string()),
                HandlerError::BodyRead(_) => logger::log_error(&err.to_string()),
            }
        }

        entry.status = outcome.response.status().as_u16();
        entry.body_bytes = response_body_len(&outcome.response);
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        if self.access_log {
            logger::log_access(&entry, &self.access_log_format);
        }

        Ok(outcome.response)
    }

    /// Match path and method, then hand the request to its handler.
    async fn route<B>(&self, req: Request<B>) -> HandlerOutcome
    where
        B: Body + Send,
        B::Data: Send,
        B::Error: std::fmt::Display,
    {
        if req.uri().path() != self.endpoint_path {
            logger::log_warning(&format!("No route for {}", req.uri().path()));
            return HandlerOutcome::ok(http::build_404_response());
        }

        match *req.method() {
            Method::GET => self.serve_file.handle(req).await,
            Method::POST => self.echo_json.handle(req).await,
            ref method => {
                logger::log_warning(&format!("Method not allowed: {method}"));
                HandlerOutcome::ok(http::build_405_response())
            }
        }
    }
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2.0"
    } else {
        "1.1"
    }
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn response_body_len(response: &Response<Full<Bytes>>) -> usize {
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX)
}
