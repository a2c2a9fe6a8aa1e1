//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    products::{MongoProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] mongodb::error::Error),

    #[error("failed to ensure product index")]
    Index(#[source] mongodb::error::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    /// Build application context from a `MongoDB` connection string.
    ///
    /// The product identifier index is created before the context is returned,
    /// so a context only exists once uniqueness is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns an error when the client cannot be built or the index cannot be created.
    pub async fn from_database_url(
        url: &str,
        database: &str,
        collection: &str,
    ) -> Result<Self, AppInitError> {
        let client = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(client, database, collection);

        let index = db
            .ensure_product_index()
            .await
            .map_err(AppInitError::Index)?;

        info!(database, collection, index = %index, "product index ensured");

        Ok(Self::new(Arc::new(MongoProductsService::new(db))))
    }
}
