//! Centralized error responses for the HTTP API.
//!
//! Every failure leaves the server as `{"error": "<message>"}` with a 4xx status,
//! so clients only need to look for the `error` key.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use log::warn;
use serde_json::json;
use thiserror::Error;

use crate::grid::GridError;
use crate::maze::MazeError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error("invalid request body: {0}")]
    InvalidPayload(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        warn!("[Server] rejected request: {}", self);
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Turns JSON extraction failures into the API's own error body.
pub fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    ApiError::InvalidPayload(err.to_string()).into()
}
