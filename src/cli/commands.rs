use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo-graphql")]
#[command(author, version, about = "A GraphQL API for todos backed by Postgres")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for todo-graphql.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Postgres connection string (overrides config)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file, rotated daily
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Host name or IP address to bind
        #[arg(long, env = "TODO_GRAPHQL_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "TODO_GRAPHQL_PORT")]
        port: Option<u16>,

        /// Keep todos in memory instead of Postgres
        #[arg(long)]
        in_memory: bool,
    },

    /// Execute a GraphQL query and print the response
    Query {
        /// GraphQL document
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Keep todos in memory instead of Postgres
        #[arg(long)]
        in_memory: bool,
    },

    /// Execute a GraphQL mutation and print the response
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Keep todos in memory instead of Postgres
        #[arg(long)]
        in_memory: bool,
    },

    /// Print the GraphQL schema as SDL
    Schema,

    /// Create the todos table if it does not exist
    Migrate,
}
