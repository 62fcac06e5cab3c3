//! HTTP mapping for [`OrderError`].

use crate::order_actor::OrderError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// `{"error": "<message>"}` with the given status.
fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

impl OrderError {
    /// Every workflow abort is the client's problem (400), remote failures included.
    pub fn status(&self) -> StatusCode {
        match self {
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::ProductNotFound(_)
            | OrderError::InsufficientStock { .. }
            | OrderError::StockDecrementRejected(_)
            | OrderError::RemoteCall { .. }
            | OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        json_error(status, self.to_string())
    }
}

impl From<JsonRejection> for OrderError {
    fn from(rejection: JsonRejection) -> Self {
        OrderError::Validation(rejection.body_text())
    }
}
