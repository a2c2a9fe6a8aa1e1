use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct EnsureIndexArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: EnsureIndexArgs) -> Result<(), String> {
    let db = args.database.connect().await?;

    let index = db
        .ensure_product_index()
        .await
        .map_err(|error| format!("failed to ensure product index: {error}"))?;

    println!("database: {}", db.database_name());
    println!("ensured index: {index}");

    Ok(())
}
