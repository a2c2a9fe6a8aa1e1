//! Product Index Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        codec::{ProductResponse, encode},
        errors::into_api_error,
    },
    state::State,
};

/// Product Index Handler
///
/// Returns every stored product as a JSON array.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products: Vec<ProductResponse> = state
        .app
        .products
        .list_products()
        .await
        .map_err(|error| into_api_error(error, "failed to get all products"))?
        .into_iter()
        .map(Into::into)
        .collect();

    encode(&products)
}
