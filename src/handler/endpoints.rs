//! Endpoint handlers for the configured data endpoint.
//!
//! `ServeFile` answers GET with the configured file's bytes; `EchoJson`
//! answers POST by dumping the body to the log and acknowledging with an
//! empty 200.

use std::future::Future;

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::Request;
use serde_json::{Map, Value};
use tokio::fs;

use crate::dump;
use crate::handler::{Handler, HandlerError, HandlerOutcome};
use crate::http;
use crate::logger;

/// GET handler: serves the configured file verbatim as JSON.
///
/// The file is read per request; replacing it on disk is visible on the next
/// GET. A read failure yields a 500 and a `FileRead` error, which the router
/// records at fatal severity.
pub struct ServeFile {
    file_path: String,
}

impl ServeFile {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    async fn serve(&self) -> HandlerOutcome {
        match fs::read(&self.file_path).await {
            Ok(data) => {
                logger::log_sending(&data);
                HandlerOutcome::ok(http::build_raw_json_response(Bytes::from(data)))
            }
            Err(source) => HandlerOutcome::with_error(
                http::build_500_response(),
                HandlerError::FileRead {
                    path: self.file_path.clone(),
                    source,
                },
            ),
        }
    }
}

impl<B> Handler<B> for ServeFile {
    fn handle(&self, _req: Request<B>) -> impl Future<Output = HandlerOutcome> + Send {
        // The request carries no parameters worth consulting.
        self.serve()
    }
}

/// POST handler: logs the body and its decoded JSON dump, never stores it.
///
/// Decode failure (malformed JSON, or a non-object top level) is logged and
/// swallowed; the response stays an empty 200 either way.
#[derive(Default)]
pub struct EchoJson;

impl EchoJson {
    pub const fn new() -> Self {
        Self
    }
}

impl<B> Handler<B> for EchoJson
where
    B: Body + Send,
    B::Data: Send,
    B::Error: std::fmt::Display,
{
    fn handle(&self, req: Request<B>) -> impl Future<Output = HandlerOutcome> + Send {
        async move {
            let payload = match req.into_body().collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(err) => {
                    return HandlerOutcome::with_error(
                        http::build_500_response(),
                        HandlerError::BodyRead(err.to_string()),
                    );
                }
            };

            logger::log_request_body(&payload);

            match serde_json::from_slice::<Map<String, Value>>(&payload) {
                Ok(object) => logger::log_json_dump(&dump::render_object(&object)),
                Err(err) => logger::log_decode_failure(&err),
            }

            HandlerOutcome::ok(http::build_empty_response())
        }
    }
}
