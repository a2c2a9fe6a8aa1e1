//! Products Repository

use mongodb::{ClientSession, Collection, bson::Document, error::Error};

use crate::{
    database::PRODUCT_ID_FIELD,
    products::models::{Product, ProductId},
};

#[derive(Debug, Clone)]
pub(crate) struct MongoProductsRepository {
    collection: Collection<Product>,
}

impl MongoProductsRepository {
    #[must_use]
    pub(crate) fn new(collection: Collection<Product>) -> Self {
        Self { collection }
    }

    pub(crate) async fn list_products(
        &self,
        session: &mut ClientSession,
    ) -> Result<Vec<Product>, Error> {
        let mut cursor = self
            .collection
            .find(Document::new())
            .session(&mut *session)
            .await?;

        let mut products = Vec::new();

        while let Some(product) = cursor.next(&mut *session).await {
            products.push(product?);
        }

        Ok(products)
    }

    pub(crate) async fn get_product(
        &self,
        session: &mut ClientSession,
        id: &ProductId,
    ) -> Result<Option<Product>, Error> {
        self.collection
            .find_one(id_filter(id))
            .session(session)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        session: &mut ClientSession,
        product: &Product,
    ) -> Result<(), Error> {
        self.collection
            .insert_one(product)
            .session(session)
            .await?;

        Ok(())
    }

    /// Replace the whole document matching `id`, returning the matched count.
    pub(crate) async fn replace_product(
        &self,
        session: &mut ClientSession,
        id: &ProductId,
        product: &Product,
    ) -> Result<u64, Error> {
        let result = self
            .collection
            .replace_one(id_filter(id), product)
            .session(session)
            .await?;

        Ok(result.matched_count)
    }

    /// Delete the document matching `id`, returning the deleted count.
    pub(crate) async fn delete_product(
        &self,
        session: &mut ClientSession,
        id: &ProductId,
    ) -> Result<u64, Error> {
        let result = self
            .collection
            .delete_one(id_filter(id))
            .session(session)
            .await?;

        Ok(result.deleted_count)
    }
}

fn id_filter(id: &ProductId) -> Document {
    let mut filter = Document::new();

    filter.insert(PRODUCT_ID_FIELD, id.as_str());

    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_matches_identifier_field_only() {
        let filter = id_filter(&"abc".into());

        assert_eq!(filter.len(), 1, "filter should have a single key");
        assert_eq!(filter.get_str(PRODUCT_ID_FIELD).ok(), Some("abc"));
    }
}
