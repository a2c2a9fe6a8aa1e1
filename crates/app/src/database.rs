//! Database connection management

use mongodb::{
    Client, ClientSession, Collection, IndexModel,
    bson::Document,
    error::Error,
    options::{ClientOptions, IndexOptions, ReadPreference, SelectionCriteria},
};

/// Name of the unique index guarding product identifiers.
pub const PRODUCT_ID_INDEX: &str = "products_id_unique";

/// Document field used as the product identifier.
pub const PRODUCT_ID_FIELD: &str = "id";

const APP_NAME: &str = "store-app";

/// Handle to one collection within one database of a shared client.
///
/// Cloning is cheap: every clone shares the client's connection pool.
#[derive(Debug, Clone)]
pub struct Db {
    client: Client,
    database: String,
    collection: String,
}

impl Db {
    #[must_use]
    pub fn new(client: Client, database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client,
            database: database.into(),
            collection: collection.into(),
        }
    }

    /// Start a session scoped to a single request.
    ///
    /// The session returns to the driver's pool when it is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when the driver cannot start a session.
    pub async fn session(&self) -> Result<ClientSession, Error> {
        self.client.start_session().await
    }

    /// Typed handle to the configured collection.
    #[must_use]
    pub fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.client
            .database(&self.database)
            .collection::<T>(&self.collection)
    }

    /// Name of the configured database.
    #[must_use]
    pub fn database_name(&self) -> &str {
        &self.database
    }

    /// Ensure the unique identifier index exists on the configured collection.
    ///
    /// Creating an index that already exists with the same options is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the index cannot be created.
    pub async fn ensure_product_index(&self) -> Result<String, Error> {
        let mut keys = Document::new();

        keys.insert(PRODUCT_ID_FIELD, 1);

        let index = IndexModel::builder()
            .keys(keys)
            .options(
                IndexOptions::builder()
                    .name(PRODUCT_ID_INDEX.to_string())
                    .unique(true)
                    .sparse(true)
                    .build(),
            )
            .build();

        let created = self
            .collection::<Document>()
            .create_index(index)
            .await?;

        Ok(created.index_name)
    }
}

/// Connect to `MongoDB`.
///
/// The client reads from the primary only. Connections are established lazily,
/// so an unreachable server surfaces on the first operation.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub async fn connect(uri: &str) -> Result<Client, Error> {
    let mut options = ClientOptions::parse(uri).await?;

    options.app_name = Some(APP_NAME.to_string());
    options.selection_criteria = Some(SelectionCriteria::ReadPreference(ReadPreference::Primary));

    Client::with_options(options)
}
