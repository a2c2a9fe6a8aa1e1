use clap::{Args, Parser, Subcommand};
use store_app::database::{self, Db};

mod db;
mod products;

#[derive(Debug, Parser)]
#[command(name = "store-app", about = "Store CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Products(products::ProductsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Products(command) => products::run(command).await,
        }
    }
}

/// Connection target shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// MongoDB connection string
    #[arg(
        long,
        env = "MONGODB_URI",
        default_value = "mongodb://localhost:27017",
        hide_env_values = true
    )]
    mongodb_uri: String,

    /// Database holding the products collection
    #[arg(long, env = "MONGODB_DATABASE", default_value = "store")]
    database: String,

    /// Products collection name
    #[arg(long, env = "MONGODB_COLLECTION", default_value = "products")]
    collection: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        let client = database::connect(&self.mongodb_uri)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        Ok(Db::new(client, &self.database, &self.collection))
    }
}
