use anyhow::Result;

use crate::graphql::build_schema;
use crate::server::{GRAPHQL_PATH, run_server};

use super::CommandContext;

pub fn handle_serve(
    ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    in_memory: bool,
) -> Result<()> {
    let config = ctx.config.clone().with_listen(host, port);
    let (host, port) = config.listen_addr();

    tokio::runtime::Runtime::new()?.block_on(async {
        let store = ctx.open_store(in_memory).await?;
        let schema = build_schema(store);

        println!("Starting GraphQL server on http://{}:{}{}", host, port, GRAPHQL_PATH);
        println!("GraphiQL: http://{}:{}", host, port);

        run_server(schema, host, port).await?;
        anyhow::Ok(())
    })
}
