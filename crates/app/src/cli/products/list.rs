use clap::Args;
use store_app::products::{MongoProductsService, ProductsService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let service = MongoProductsService::new(args.database.connect().await?);

    let products = service
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    let json = serde_json::to_string_pretty(&products)
        .map_err(|error| format!("failed to encode products: {error}"))?;

    println!("{json}");

    Ok(())
}
