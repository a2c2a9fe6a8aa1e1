//! JSON error responses.

use salvo::{http::StatusCode, prelude::*};
use serde::{Deserialize, Serialize};

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    pub message: String,
}

/// An HTTP status with a fixed client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub(crate) const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub(crate) const fn incorrect_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Incorrect body")
    }

    pub(crate) const fn already_exists() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Product with this id already exists",
        )
    }

    pub(crate) const fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Product not found")
    }

    pub(crate) const fn database() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
    }

    pub(crate) const fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    pub(crate) const fn status(&self) -> StatusCode {
        self.status
    }

    pub(crate) const fn message(&self) -> &'static str {
        self.message
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status());
        res.render(Json(ErrorResponse {
            message: self.message().to_string(),
        }));
    }
}
