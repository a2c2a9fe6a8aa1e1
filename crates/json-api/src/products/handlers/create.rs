//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::info;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        codec::{decode_body, location},
        errors::into_api_error,
    },
    state::State,
};

/// Create Product Handler
///
/// Responds `201 Created` with a `Location` header and no body.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, ApiError> {
    let request = decode_body(req).await?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(request.into())
        .await
        .map_err(|error| into_api_error(error, "failed to insert product"))?;

    res.add_header(LOCATION, location(req.uri().path(), &product.id), true)
        .or_500("failed to set location header")?;

    info!(product_id = %product.id, "created product");

    Ok(StatusCode::CREATED)
}
