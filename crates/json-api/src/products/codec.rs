//! Product wire format.
//!
//! Request bodies are decoded regardless of their declared content type and
//! responses are written as indented JSON.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use salvo::{prelude::*, writing::Text};
use serde::{Deserialize, Serialize};
use tracing::debug;

use store_app::products::models::{NewProduct, Product, ProductId, ProductUpdate};

use crate::{errors::ApiError, extensions::*};

/// Characters escaped when an identifier becomes a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Product request body, used for both create and full replacement.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductRequest {
    /// Optional on create, ignored on update
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub price: String,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        NewProduct {
            id: request.id.map(Into::into),
            name: request.name,
            price: request.price,
        }
    }
}

impl From<ProductRequest> for ProductUpdate {
    fn from(request: ProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            price: request.price,
        }
    }
}

/// Product response body
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.into_string(),
            name: product.name,
            price: product.price,
        }
    }
}

/// Decode the request body into a product request.
pub(crate) async fn decode_body(req: &mut Request) -> Result<ProductRequest, ApiError> {
    let payload = req.payload().await.map_err(|error| {
        debug!("failed to read request body: {error}");

        ApiError::incorrect_body()
    })?;

    serde_json::from_slice(payload).map_err(|error| {
        debug!("failed to decode product body: {error}");

        ApiError::incorrect_body()
    })
}

/// Encode a response body as indented JSON.
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Text<String>, ApiError> {
    serde_json::to_string_pretty(value)
        .map(Text::Json)
        .or_500("failed to encode response body")
}

/// Read the `{id}` path parameter.
pub(crate) fn path_id(req: &Request) -> Result<ProductId, ApiError> {
    req.param::<String>("id")
        .map(ProductId::from)
        .ok_or_else(ApiError::not_found)
}

/// Build the `Location` of a stored product under the collection `path`.
pub(crate) fn location(path: &str, id: &ProductId) -> String {
    format!(
        "{}/{}",
        path.trim_end_matches('/'),
        utf8_percent_encode(id.as_str(), PATH_SEGMENT)
    )
}
