//! HTTP response building module
//!
//! Provides builders for the decision API responses. The decision body is
//! part of the wire contract, so it is always the compact JSON encoding.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::logger;
use crate::wire::DecisionResponse;

/// Body of the 400 response: the expected request shape.
const SYNOPSIS: &str = "Synopsis: `{\"input\":{...}}`.\n";

/// Build 200 decision response with the compact `{"result":<bool>}` body
pub fn build_decision_response(result: bool) -> Response<Full<Bytes>> {
    let body = match serde_json::to_string(&DecisionResponse { result }) {
        Ok(json) => json,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize decision: {e}"));
            return Response::builder()
                .status(500)
                .header("Content-Type", "text/plain")
                .body(Full::new(Bytes::from("500 Internal Server Error")))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())));
        }
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 400 Bad Request response carrying the envelope synopsis
pub fn build_400_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(400)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(SYNOPSIS)))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            Response::new(Full::new(Bytes::from(SYNOPSIS)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}
