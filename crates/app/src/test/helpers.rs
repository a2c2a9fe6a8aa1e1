//! Test Helpers

use crate::{
    products::{
        ProductsService, ProductsServiceError,
        models::{NewProduct, Product},
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    id: Option<&str>,
    name: &str,
    price: &str,
) -> Result<Product, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            id: id.map(Into::into),
            name: name.to_string(),
            price: price.to_string(),
        })
        .await
}
