//! Request handler module
//!
//! Defines the handler contract and wires the endpoint handlers to the
//! router. A handler is a unit of logic bound to one method+path pair; it is
//! solely responsible for choosing the response bytes, and any error it
//! reports is informational only.

pub mod endpoints;
pub mod router;

pub use router::Router;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::future::Future;
use thiserror::Error;

/// Errors a handler can report alongside its response.
///
/// By the time one of these is returned the handler has already picked the
/// response; the router only records the error in the log.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The configured file could not be read. Treated as a configuration
    /// defect rather than a transient condition.
    #[error("unable to read file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The request body stream failed mid-read.
    #[error("failed to read request body: {0}")]
    BodyRead(String),
}

/// Response to send plus the informational error recorded by the router.
pub struct HandlerOutcome {
    pub response: Response<Full<Bytes>>,
    pub error: Option<HandlerError>,
}

impl HandlerOutcome {
    pub fn ok(response: Response<Full<Bytes>>) -> Self {
        Self {
            response,
            error: None,
        }
    }

    pub fn with_error(response: Response<Full<Bytes>>, error: HandlerError) -> Self {
        Self {
            response,
            error: Some(error),
        }
    }
}

/// A unit of logic bound to one method+path pair.
pub trait Handler<B> {
    /// Handle one request, producing the response to send and an optional
    /// informational error.
    fn handle(&self, req: Request<B>) -> impl Future<Output = HandlerOutcome> + Send;
}
