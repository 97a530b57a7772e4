//! HTTP error rendering
//!
//! Converts domain errors into `{ "code", "message" }` JSON bodies with the
//! matching status code. Unexpected errors are logged and surfaced as a
//! generic server failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::{CatalogError, LedgerError, PriceListError, SelectionError};

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, "request failed: {}", self.message);
        }
        let body = Json(json!({
            "code": self.code,
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}

fn status_for(not_found: bool, client: bool, conflict: bool) -> StatusCode {
    if not_found {
        StatusCode::NOT_FOUND
    } else if conflict {
        StatusCode::CONFLICT
    } else if client {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        let status = status_for(err.is_not_found(), err.is_client_error(), false);
        ApiError::new(status, err.error_code(), err.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let status = status_for(err.is_not_found(), err.is_client_error(), false);
        ApiError::new(status, err.error_code(), err.to_string())
    }
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        let status = status_for(false, err.is_client_error(), false);
        ApiError::new(status, err.error_code(), err.to_string())
    }
}

impl From<PriceListError> for ApiError {
    fn from(err: PriceListError) -> Self {
        let status = status_for(err.is_not_found(), err.is_client_error(), err.is_conflict());
        ApiError::new(status, err.error_code(), err.to_string())
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "DATABASE_ERROR",
            err.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revise_without_reason_maps_to_400() {
        let api: ApiError = LedgerError::ReasonRequired.into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.code, "REASON_REQUIRED");
    }

    #[test]
    fn activation_blocked_maps_to_409() {
        let api: ApiError = PriceListError::NotActivatable {
            id: 1,
            matched: 0,
            blocking: 1,
        }
        .into();
        assert_eq!(api.status, StatusCode::CONFLICT);
        assert_eq!(api.code, "ACTIVATION_BLOCKED");
    }

    #[test]
    fn missing_part_maps_to_404() {
        let api: ApiError = CatalogError::PartIdNotFound(3).into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.code, "PART_ID_NOT_FOUND");
    }
}
