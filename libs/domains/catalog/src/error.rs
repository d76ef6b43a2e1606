use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

/// Failures raised inside the product-creation transaction.
///
/// The referential checks run before the insert, so the first two variants are
/// deterministic. Everything the store reports ends up in `Store` and is left to
/// [`crate::classifier`].
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("product type {0} does not exist")]
    ProductTypeNotFound(i32),

    #[error("colors {0:?} do not exist")]
    ColorsNotFound(Vec<i32>),

    #[error(transparent)]
    Store(#[from] DbErr),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid reference on {field}: {message}")]
    InvalidReference { field: String, message: String },

    #[error("Conflict on {field}: {reason}")]
    Conflict { field: String, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn invalid_reference(field: &str, message: &str) -> Self {
        Self::InvalidReference {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn conflict(field: &str, reason: &str) -> Self {
        Self::Conflict {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(errors) => AppError::ValidationError(errors),
            CatalogError::InvalidReference { field, message } => {
                AppError::InvalidReference { field, message }
            }
            CatalogError::Conflict { field, reason } => AppError::Conflict { field, reason },
            CatalogError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                CatalogError::invalid_reference("product_type_id", "product type does not exist"),
                StatusCode::BAD_REQUEST,
            ),
            (
                CatalogError::conflict("products_code", "products code already exists"),
                StatusCode::CONFLICT,
            ),
            (
                CatalogError::Internal("connection reset".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CatalogError::Validation(ValidationErrors::new()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_write_error_wraps_db_err() {
        let err: WriteError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, WriteError::Store(_)));
        assert_eq!(WriteError::ColorsNotFound(vec![3, 9]).to_string(), "colors [3, 9] do not exist");
    }
}
