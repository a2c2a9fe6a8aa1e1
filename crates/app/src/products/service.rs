//! Products service.

use async_trait::async_trait;
use mockall::automock;
use mongodb::ClientSession;

use crate::{
    database::Db,
    products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductId, ProductUpdate},
        repository::MongoProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct MongoProductsService {
    db: Db,
    repository: MongoProductsRepository,
}

impl MongoProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        let repository = MongoProductsRepository::new(db.collection());

        Self { db, repository }
    }

    async fn session(&self) -> Result<ClientSession, ProductsServiceError> {
        self.db.session().await.map_err(Into::into)
    }
}

#[async_trait]
impl ProductsService for MongoProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut session = self.session().await?;

        let products = self.repository.list_products(&mut session).await?;

        Ok(products)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ProductsServiceError> {
        let mut session = self.session().await?;

        let product = self
            .repository
            .get_product(&mut session, &id)
            .await?
            .filter(|product| !product.id.is_empty())
            .ok_or(ProductsServiceError::NotFound)?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let mut session = self.session().await?;

        let product = product.into_product();

        self.repository
            .create_product(&mut session, &product)
            .await?;

        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let mut session = self.session().await?;

        let product = update.into_product(id);

        let matched = self
            .repository
            .replace_product(&mut session, &product.id, &product)
            .await?;

        if matched == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ProductsServiceError> {
        let mut session = self.session().await?;

        let deleted = self.repository.delete_product(&mut session, &id).await?;

        if deleted == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves every stored product.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product by its identifier.
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductsServiceError>;

    /// Inserts a new product, generating an identifier when none was supplied.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Replaces the product with the given identifier wholesale.
    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes the product with the given identifier.
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductsServiceError>;
}
