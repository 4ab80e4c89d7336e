use anyhow::Result;

use super::{CommandContext, run_document};

pub fn handle_query(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
    in_memory: bool,
) -> Result<()> {
    run_document(ctx, query, variables, in_memory)
}
