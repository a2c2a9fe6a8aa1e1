//! Test helpers.

use std::{io, sync::Arc};

use salvo::{affix_state::inject, prelude::*};

use store_app::{
    context::AppContext,
    products::{MockProductsService, models::Product},
};

use crate::state::State;

pub(crate) fn make_product(id: &str) -> Product {
    Product {
        id: id.into(),
        name: "Go in Action".to_string(),
        price: "35.00".to_string(),
    }
}

pub(crate) fn storage_error() -> mongodb::error::Error {
    io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused").into()
}

/// The service call a handler test expects to reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProductsCall {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// A mock that fails the test on any service call.
pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    forbid_calls_except(&mut products, None);

    products
}

/// A mock that fails the test on any service call other than `allowed`,
/// which the caller still has to set an expectation for.
pub(crate) fn products_mock_expecting(allowed: ProductsCall) -> MockProductsService {
    let mut products = MockProductsService::new();

    forbid_calls_except(&mut products, Some(allowed));

    products
}

fn forbid_calls_except(products: &mut MockProductsService, allowed: Option<ProductsCall>) {
    if allowed != Some(ProductsCall::List) {
        products.expect_list_products().never();
    }

    if allowed != Some(ProductsCall::Get) {
        products.expect_get_product().never();
    }

    if allowed != Some(ProductsCall::Create) {
        products.expect_create_product().never();
    }

    if allowed != Some(ProductsCall::Update) {
        products.expect_update_product().never();
    }

    if allowed != Some(ProductsCall::Delete) {
        products.expect_delete_product().never();
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(products)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
