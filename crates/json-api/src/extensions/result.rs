//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::error;

use crate::errors::ApiError;

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            ApiError::internal()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn test_or_500_maps_errors_to_internal() {
        let result: Result<(), &str> = Err("boom");

        let error = result.or_500("context").err();

        assert_eq!(
            error.map(|e| e.status()),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn test_or_500_passes_values_through() {
        let result: Result<u8, &str> = Ok(7);

        assert_eq!(result.or_500("context").ok(), Some(7));
    }
}
