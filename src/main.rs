use anyhow::{Context, Result};
use clap::Parser;

use todo_graphql::cli::handlers::{
    CommandContext, handle_migrate, handle_mutate, handle_query, handle_schema, handle_serve,
};
use todo_graphql::cli::{Cli, Commands};
use todo_graphql::config::AppConfig;
use todo_graphql::logging;

fn main() -> Result<()> {
    // Loaded before parsing so DATABASE_URL and the TODO_GRAPHQL_* settings can come from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    if let Commands::Schema = cli.command {
        return handle_schema();
    }

    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_database_url(cli.database_url.clone());
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve {
            host,
            port,
            in_memory,
        } => handle_serve(ctx, host, port, in_memory),
        Commands::Query {
            query,
            variables,
            in_memory,
        } => handle_query(ctx, query, variables, in_memory),
        Commands::Mutate {
            mutation,
            variables,
            in_memory,
        } => handle_mutate(ctx, mutation, variables, in_memory),
        Commands::Migrate => handle_migrate(ctx),
        Commands::Schema => handle_schema(),
    }
}
