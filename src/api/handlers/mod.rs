//! HTTP request handlers, one module per resource.

pub mod alunos;
pub mod notas;
pub mod professores;
pub mod reservas;
pub mod tarefas;
pub mod turmas;

use axum::{Json, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::domain::{AppError, ErrorDetail, ErrorResponse, StoreError};

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_type) = match &self {
            AppError::Store(StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Store(StoreError::Poisoned(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "store_error")
            }
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Reference(_) => (StatusCode::BAD_REQUEST, "invalid_reference"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let message = self.to_string();
        if status.is_server_error() {
            error!(error_type, %message, "server error");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                r#type: error_type.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}
