mod migrate;
mod mutate;
mod query;
mod schema;
mod serve;

pub use migrate::handle_migrate;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::storage::{MemoryTodoStore, PgTodoStore, SharedStore};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: AppConfig,
}

impl CommandContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Opens Postgres (and creates the table if needed) or, with `in_memory`,
    /// a fresh volatile store.
    pub async fn open_store(&self, in_memory: bool) -> Result<SharedStore> {
        if in_memory {
            tracing::info!("Using in-memory store");
            return Ok(Arc::new(MemoryTodoStore::new()));
        }

        let store = self.connect().await?;
        store.migrate().await.context("Failed to run database migrations")?;
        Ok(Arc::new(store))
    }

    pub async fn connect(&self) -> Result<PgTodoStore> {
        let url = self.config.database_url()?;
        PgTodoStore::connect(url, self.config.database.max_connections)
            .await
            .context("Failed to connect to database")
    }
}

/// Shared by `query` and `mutate`.
fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => {
            let json: serde_json::Value =
                serde_json::from_str(&v).context("Variables must be a JSON object")?;
            Ok(async_graphql::Variables::from_json(json))
        }
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Executes `document` once against a freshly opened store and prints the response.
fn run_document(
    ctx: CommandContext,
    document: String,
    variables: Option<String>,
    in_memory: bool,
) -> Result<()> {
    let vars = parse_variables(variables)?;

    let response = tokio::runtime::Runtime::new()?.block_on(async {
        let store = ctx.open_store(in_memory).await?;
        let schema = crate::graphql::build_schema(store);
        let request = async_graphql::Request::new(document).variables(vars);
        anyhow::Ok(crate::graphql::execute(&schema, request).await)
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
