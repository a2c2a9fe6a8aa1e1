//! App Router

use salvo::Router;

use crate::products;

/// Product routes, mounted at the server root.
pub(crate) fn app_router() -> Router {
    Router::new().push(
        Router::with_path("products")
            .get(products::index::handler)
            .post(products::create::handler)
            .push(
                Router::with_path("{id}")
                    .get(products::get::handler)
                    .put(products::update::handler)
                    .delete(products::delete::handler),
            ),
    )
}
