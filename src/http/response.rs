//! HTTP response building module
//!
//! Two JSON entry points (raw bytes, or serialize-then-send) plus the error
//! status builders. Builders never panic; a build failure is logged and
//! degrades to a bare response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ALLOW};
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

/// Write a byte payload as the response body with a JSON content type.
pub fn build_raw_json_response(payload: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .body(Full::new(payload))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Serialize `value` to JSON and send it as the response body.
///
/// Serialization failure degrades to the 500 response; no partial body is
/// ever written.
pub fn build_json_response<T: Serialize>(value: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(value) {
        Ok(payload) => build_raw_json_response(Bytes::from(payload)),
        Err(err) => {
            logger::log_error(&format!("Failed to serialize response payload: {err}"));
            build_500_response()
        }
    }
}

/// Empty 200 acknowledgment for the echo endpoint.
pub fn build_empty_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    let mut response = build_json_response(&serde_json::json!({ "error": "Not Found" }));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut response = build_json_response(&serde_json::json!({ "error": "Method Not Allowed" }));
    *response.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static("GET, POST"));
    response
}

/// Build 500 Internal Server Error response (no structured body)
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            let mut response = Response::new(Full::new(Bytes::new()));
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde::Serializer;

    async fn collect_body(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_raw_json_response() {
        let response = build_raw_json_response(Bytes::from_static(br#"{"a":1}"#));
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(collect_body(response).await.as_ref(), br#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_json_response_serializes_value() {
        let response = build_json_response(&serde_json::json!({ "status": "ok" }));
        assert_eq!(response.status(), 200);
        assert_eq!(collect_body(response).await.as_ref(), br#"{"status":"ok"}"#);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("always fails"))
        }
    }

    #[tokio::test]
    async fn test_serialize_failure_degrades_to_500() {
        let response = build_json_response(&Unserializable);
        assert_eq!(response.status(), 500);
        assert!(collect_body(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_response() {
        let response = build_empty_response();
        assert_eq!(response.status(), 200);
        assert!(collect_body(response).await.is_empty());
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(build_404_response().status(), 404);
        let method_not_allowed = build_405_response();
        assert_eq!(method_not_allowed.status(), 405);
        assert_eq!(method_not_allowed.headers()["allow"], "GET, POST");
        assert_eq!(build_500_response().status(), 500);
    }
}
