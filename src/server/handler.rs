//! Request dispatch module
//!
//! Entry point for decision requests: route check, then mode dispatch.
//! Any HTTP method is accepted on the decision route.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;

use super::DECISION_PATH;
use crate::http::{build_400_response, build_404_response, build_decision_response};
use crate::logger;
use crate::policy::{self, DecisionMode};
use crate::wire::DecisionInput;

/// Main entry point for decision request handling.
///
/// Generic over the body type so tests can drive it with `Full<Bytes>`
/// while the server feeds it `hyper::body::Incoming`.
pub async fn handle_request<B>(
    req: Request<B>,
    mode: DecisionMode,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: hyper::body::Body,
{
    if req.uri().path() != DECISION_PATH {
        return Ok(build_404_response());
    }

    // The stub answers without touching the body.
    if mode == DecisionMode::Stub {
        return Ok(build_decision_response(false));
    }

    // Read request body
    let whole_body = if let Ok(collected) = req.collect().await {
        collected.to_bytes()
    } else {
        logger::log_error("Failed to read request body");
        return Ok(build_400_response());
    };

    let envelope: DecisionInput = match serde_json::from_slice(&whole_body) {
        Ok(parsed) => parsed,
        Err(_) => return Ok(build_400_response()),
    };

    Ok(build_decision_response(policy::decide(&envelope.input, mode)))
}
