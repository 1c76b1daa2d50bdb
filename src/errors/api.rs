use poem::error::ResponseError;
use poem::http::StatusCode;
use poem::Response;
use serde_json::json;
use thiserror::Error;

use super::internal::InternalError;
use super::not_found::NotFoundError;
use crate::services::validation::ValidationError;

/// The three failure kinds that receive structured API responses
///
/// Everything outside this taxonomy is an infrastructure failure and passes
/// through the handler boundary untranslated as a bare 500.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested list or item does not exist
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Request body parsed but violates the required-field schema
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request body is not parseable as JSON at all
    #[error("invalid request body format : \"{0}\"")]
    MalformedBody(String),
}

impl ApiError {
    /// Wrap a JSON parse failure, keeping the parser's message
    pub fn malformed_body(source: &serde_json::Error) -> Self {
        ApiError::MalformedBody(source.to_string())
    }

    /// Translate a store failure at the handler boundary
    ///
    /// NotFound becomes a structured 404. Every other store error is an
    /// infrastructure failure and is forwarded as a plain 500 rather than
    /// rendered into the response taxonomy.
    pub fn from_store(error: InternalError) -> poem::Error {
        match error {
            InternalError::NotFound(not_found) => ApiError::NotFound(not_found).into(),
            other => poem::error::InternalServerError(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn as_response(&self) -> Response {
        let body = match self {
            ApiError::NotFound(not_found) => json!({ "error": not_found.to_string() }),
            ApiError::Validation(validation) => json!({ "errors": validation.messages }),
            ApiError::MalformedBody(_) => json!({ "error": self.to_string() }),
        };

        Response::builder()
            .status(self.status())
            .content_type("application/json")
            .body(body.to_string())
    }
}
