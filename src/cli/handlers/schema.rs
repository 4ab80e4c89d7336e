use anyhow::Result;

use crate::graphql::build_schema;
use crate::storage::MemoryTodoStore;

/// Prints the SDL. The store is never touched, so no database is needed.
pub fn handle_schema() -> Result<()> {
    let schema = build_schema(std::sync::Arc::new(MemoryTodoStore::new()));
    print!("{}", schema.sdl());
    Ok(())
}
