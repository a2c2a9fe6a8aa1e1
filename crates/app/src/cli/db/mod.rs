use clap::{Args, Subcommand};

mod ensure_index;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    EnsureIndex(ensure_index::EnsureIndexArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::EnsureIndex(args) => ensure_index::run(args).await,
    }
}
