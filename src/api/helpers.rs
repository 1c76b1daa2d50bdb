use poem::http::StatusCode;
use poem::{Body, Response, Result};
use serde::Serialize;
use serde_json::Value;

use crate::errors::api::ApiError;

/// Read a request body and parse it as JSON
///
/// A body that does not parse at all fails as MalformedBody, before any
/// schema validation - a distinct error kind from a schema violation.
pub async fn read_json_body(body: Body) -> Result<Value> {
    let raw = body.into_string().await?;
    serde_json::from_str(&raw).map_err(|e| ApiError::malformed_body(&e).into())
}

/// Success response with a JSON payload and the default headers
pub fn json_response(status: StatusCode, payload: &impl Serialize) -> Result<Response> {
    let body = serde_json::to_string(payload).map_err(poem::error::InternalServerError)?;

    Ok(Response::builder()
        .status(status)
        .content_type("application/json")
        .body(body))
}

/// 204 response: empty body, no content-type header
pub fn no_content() -> Response {
    Response::builder().status(StatusCode::NO_CONTENT).finish()
}
