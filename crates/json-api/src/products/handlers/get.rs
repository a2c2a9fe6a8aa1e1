//! Get Product Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        codec::{ProductResponse, encode, path_id},
        errors::into_api_error,
    },
    state::State,
};

/// Get Product Handler
///
/// Returns a single product.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<Text<String>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(path_id(req)?)
        .await
        .map_err(|error| into_api_error(error, "failed to find product"))?;

    encode(&ProductResponse::from(product))
}
