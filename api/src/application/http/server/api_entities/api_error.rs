use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use sibra_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    UnProcessableEntity(String),

    #[error("{0}")]
    PayloadTooLarge(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnProcessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::Unauthorized(_) => "E_UNAUTHORIZED",
            ApiError::Forbidden(_) => "E_FORBIDDEN",
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::Conflict(_) => "E_CONFLICT",
            ApiError::UnProcessableEntity(_) => "E_UNPROCESSABLE_ENTITY",
            ApiError::PayloadTooLarge(_) => "E_PAYLOAD_TOO_LARGE",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::Unauthorized => ApiError::Unauthorized("Unauthorized".to_string()),
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::Conflict(message) => ApiError::Conflict(message),
            CoreError::MissingAssociateIdentifier => {
                ApiError::BadRequest(CoreError::MissingAssociateIdentifier.to_string())
            }
            CoreError::InternalServerError
            | CoreError::StorageError(_)
            | CoreError::ExternalServiceError(_) => {
                error!("Request failed: {}", error);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before reaching the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::UnProcessableEntity(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::Unauthorized, StatusCode::UNAUTHORIZED),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (CoreError::Forbidden("editor".to_string()), StatusCode::FORBIDDEN),
            (CoreError::InvalidInput("x".to_string()), StatusCode::BAD_REQUEST),
            (CoreError::MissingAssociateIdentifier, StatusCode::BAD_REQUEST),
            (CoreError::Conflict("email".to_string()), StatusCode::CONFLICT),
            (
                CoreError::StorageError("disk".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::ExternalServiceError("graph".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status(), status);
        }
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let error = ApiError::from(CoreError::StorageError("/var/www/static".to_string()));
        assert_eq!(error.to_string(), "Internal server error");
    }

    #[test]
    fn test_missing_identifier_message() {
        let error = ApiError::from(CoreError::MissingAssociateIdentifier);
        assert_eq!(error.to_string(), "RFC or CURP must be set");
    }
}
