//! Product Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Product identifier as stored in the `id` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier from a database-native object id.
    #[must_use]
    pub fn generate() -> Self {
        Self(ObjectId::new().to_hex())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Product Model
///
/// Missing fields decode to empty strings; the document's own `_id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Client supplied identifier; one is generated when absent or empty.
    pub id: Option<ProductId>,
    pub name: String,
    pub price: String,
}

/// Product Replacement Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: String,
}

impl NewProduct {
    pub(crate) fn into_product(self) -> Product {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(ProductId::generate);

        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

impl ProductUpdate {
    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}
