//! Database Config

use clap::Args;

/// Document database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `MongoDB` connection string
    #[arg(
        long,
        env = "MONGODB_URI",
        default_value = "mongodb://localhost:27017",
        hide_env_values = true
    )]
    pub mongodb_uri: String,

    /// Database holding the products collection
    #[arg(long, env = "MONGODB_DATABASE", default_value = "store")]
    pub database: String,

    /// Products collection name
    #[arg(long, env = "MONGODB_COLLECTION", default_value = "products")]
    pub collection: String,
}
