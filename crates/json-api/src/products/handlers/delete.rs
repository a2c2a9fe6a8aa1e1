//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{codec::path_id, errors::into_api_error},
    state::State,
};

/// Delete Product Handler
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let id = path_id(req)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .delete_product(id.clone())
        .await
        .map_err(|error| into_api_error(error, "failed to delete product"))?;

    info!(product_id = %id, "deleted product");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use store_app::products::{MockProductsService, ProductsServiceError};

    use crate::{
        errors::ErrorResponse,
        test_helpers::{ProductsCall, products_mock_expecting, products_service, storage_error},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_returns_204() -> TestResult {
        let mut repo = products_mock_expecting(ProductsCall::Delete);

        repo.expect_delete_product()
            .once()
            .withf(|id| id.as_str() == "abc")
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/products/abc")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_404() -> TestResult {
        let mut repo = products_mock_expecting(ProductsCall::Delete);

        repo.expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::delete("http://example.com/products/abc")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_storage_error_returns_500() -> TestResult {
        let mut repo = products_mock_expecting(ProductsCall::Delete);

        repo.expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::Storage(storage_error())));

        let mut res = TestClient::delete("http://example.com/products/abc")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "Database error");

        Ok(())
    }
}
