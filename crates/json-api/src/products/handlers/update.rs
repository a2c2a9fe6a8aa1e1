//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        codec::{decode_body, path_id},
        errors::into_api_error,
    },
    state::State,
};

/// Update Product Handler
///
/// Replaces the stored product wholesale. The path identifier wins over any
/// `id` in the body.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let id = path_id(req)?;
    let request = decode_body(req).await?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .update_product(id, request.into())
        .await
        .map_err(|error| into_api_error(error, "failed to update product"))?;

    info!(product_id = %product.id, "updated product");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use store_app::products::{
        MockProductsService, ProductsServiceError,
        models::{Product, ProductUpdate},
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{
            ProductsCall, products_mock_expecting, products_service, storage_error,
            strict_products_mock,
        },
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_returns_204_and_uses_path_id() -> TestResult {
        let mut repo = products_mock_expecting(ProductsCall::Update);

        repo.expect_update_product()
            .once()
            .withf(|id, update| {
                id.as_str() == "abc"
                    && *update
                        == ProductUpdate {
                            name: "Go in Action, 2nd ed".to_string(),
                            price: "40.00".to_string(),
                        }
            })
            .return_once(|id, update| {
                Ok(Product {
                    id,
                    name: update.name,
                    price: update.price,
                })
            });

        let mut res = TestClient::put("http://example.com/products/abc")
            .json(&json!({
                "id": "something-else",
                "name": "Go in Action, 2nd ed",
                "price": "40.00"
            }))
            .send(&make_service(repo))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert!(body.is_empty(), "no content responses carry no body");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let mut repo = products_mock_expecting(ProductsCall::Update);

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::put("http://example.com/products/missing")
            .json(&json!({ "name": "x", "price": "1.00" }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_malformed_body_returns_400() -> TestResult {
        let repo = strict_products_mock();

        let mut res = TestClient::put("http://example.com/products/abc")
            .text("not json")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Incorrect body");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_storage_error_returns_500() -> TestResult {
        let mut repo = products_mock_expecting(ProductsCall::Update);

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::Storage(storage_error())));

        let mut res = TestClient::put("http://example.com/products/abc")
            .json(&json!({ "name": "x", "price": "1.00" }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "Database error");

        Ok(())
    }
}
