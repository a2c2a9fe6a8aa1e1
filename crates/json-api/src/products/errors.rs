//! Product Errors

use tracing::error;

use store_app::products::ProductsServiceError;

use crate::errors::ApiError;

/// Map a service failure to its HTTP error, logging storage failures with `context`.
pub(crate) fn into_api_error(error: ProductsServiceError, context: &str) -> ApiError {
    match error {
        ProductsServiceError::AlreadyExists => ApiError::already_exists(),
        ProductsServiceError::NotFound => ApiError::not_found(),
        ProductsServiceError::Storage(source) => {
            error!("{context}: {source}");

            ApiError::database()
        }
    }
}
