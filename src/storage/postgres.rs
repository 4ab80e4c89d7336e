use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::TodoStore;
use crate::{
    error::{Result, TodoError},
    model::{NewTodo, Todo, TodoFilter},
};

/// Column list for `todos` queries.
const TODO_COLUMNS: &str = "id, name, status";

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Creates the `todos` table when it does not exist yet.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Opens a pool against `database_url` and checks that it answers.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::info!(max_connections, "Database connection pool created");

        let store = Self::from_pool(pool);
        store.health_check().await?;
        Ok(store)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn migrate(&self) -> Result<()> {
        run_migrations(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}

/// `SELECT` over `todos` with one equality predicate per supplied filter field.
fn select_matching(filter: &TodoFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {TODO_COLUMNS} FROM todos"));
    let mut separator = " WHERE ";

    if let Some(id) = filter.id {
        query.push(separator).push("id = ").push_bind(id);
        separator = " AND ";
    }
    if let Some(name) = &filter.name {
        query.push(separator).push("name = ").push_bind(name.clone());
        separator = " AND ";
    }
    if let Some(status) = filter.status {
        query.push(separator).push("status = ").push_bind(status);
    }

    query.push(" ORDER BY id");
    query
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn find_first(&self, filter: &TodoFilter) -> Result<Option<Todo>> {
        let mut query = select_matching(filter);
        query.push(" LIMIT 1");
        let todo = query
            .build_query_as::<Todo>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn find_all(&self, filter: &TodoFilter) -> Result<Vec<Todo>> {
        let mut query = select_matching(filter);
        let todos = query.build_query_as::<Todo>().fetch_all(&self.pool).await?;
        Ok(todos)
    }

    async fn insert(&self, todo: NewTodo) -> Result<Todo> {
        let query =
            format!("INSERT INTO todos (name, status) VALUES ($1, $2) RETURNING {TODO_COLUMNS}");
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(&todo.name)
            .bind(todo.status)
            .fetch_one(&self.pool)
            .await?;
        tracing::info!(id = todo.id, name = %todo.name, "Inserted todo");
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> Result<Todo> {
        let query = format!(
            "UPDATE todos SET name = $2, status = $3 WHERE id = $1 RETURNING {TODO_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Todo>(&query)
            .bind(todo.id)
            .bind(&todo.name)
            .bind(todo.status)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(TodoError::NotFound)?;
        tracing::info!(id = updated.id, "Updated todo");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::info!(id, rows = result.rows_affected(), "Deleted todo");
        Ok(result.rows_affected() > 0)
    }
}
