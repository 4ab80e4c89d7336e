use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_migrate(ctx: CommandContext) -> Result<()> {
    tokio::runtime::Runtime::new()?.block_on(async {
        let store = ctx.connect().await?;
        store
            .migrate()
            .await
            .context("Failed to run database migrations")?;
        anyhow::Ok(())
    })?;

    println!("Database is up to date");
    Ok(())
}
