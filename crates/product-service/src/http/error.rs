//! HTTP mapping for [`ProductError`].

use crate::product_actor::ProductError;
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

impl ProductError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::StockUnavailable(_)
            | ProductError::InvalidQuantity(_)
            | ProductError::Validation(_) => StatusCode::BAD_REQUEST,
            ProductError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        json_error(status, self.to_string())
    }
}

impl From<JsonRejection> for ProductError {
    fn from(rejection: JsonRejection) -> Self {
        ProductError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            ProductError::NotFound("1".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ProductError::StockUnavailable("1".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProductError::InvalidQuantity(0).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProductError::ActorCommunicationError("closed".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
