//! Storage layer for todos.
//!
//! Todos live in a single relational table:
//!
//! ```sql
//! CREATE TABLE todos (
//!     id     SERIAL  PRIMARY KEY,
//!     name   TEXT    NOT NULL,
//!     status INTEGER NOT NULL DEFAULT 1
//! );
//! ```
//!
//! ## Components
//!
//! - [`TodoStore`]: the operations resolvers are allowed to perform
//! - [`PgTodoStore`]: Postgres-backed store over a `sqlx` pool
//! - [`MemoryTodoStore`]: volatile store for local runs and tests

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{NewTodo, Todo, TodoFilter};

pub use memory::MemoryTodoStore;
pub use postgres::{PgTodoStore, run_migrations};

/// Shared handle injected into the schema at build time.
pub type SharedStore = Arc<dyn TodoStore>;

/// Table operations backing the GraphQL resolvers.
///
/// Implementations must be safe to call from many requests at once and must
/// never hand out the same id twice.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// First todo (lowest id) matching every supplied field of `filter`.
    async fn find_first(&self, filter: &TodoFilter) -> Result<Option<Todo>>;

    /// All todos matching `filter`, ordered by id.
    async fn find_all(&self, filter: &TodoFilter) -> Result<Vec<Todo>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Todo>> {
        self.find_first(&TodoFilter::by_id(id)).await
    }

    /// Persists `todo` and returns it with its assigned id.
    async fn insert(&self, todo: NewTodo) -> Result<Todo>;

    /// Writes every column of `todo` back to its row.
    async fn update(&self, todo: &Todo) -> Result<Todo>;

    /// Removes the row with `id`. Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool>;
}
