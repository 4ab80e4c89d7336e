use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::{SharedStore, TodoStore};

use super::resolvers;
use super::types::*;

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a dyn TodoStore> {
    let store = ctx.data::<SharedStore>()?;
    Ok(store.as_ref())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get the first todo matching every supplied argument
    async fn todo(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
        name: Option<String>,
        status: Option<i32>,
    ) -> async_graphql::Result<Option<Todo>> {
        let args = TodoLookupArgs { id, name, status };
        let todo = resolvers::todo(get_store(ctx)?, args).await?;
        Ok(Some(todo.into()))
    }

    /// List all todos matching every supplied argument
    async fn todos(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
        name: Option<String>,
        status: Option<i32>,
    ) -> async_graphql::Result<Option<Vec<Option<Todo>>>> {
        let args = TodoLookupArgs { id, name, status };
        let todos = resolvers::todos(get_store(ctx)?, args).await?;
        Ok(Some(todos.into_iter().map(|t| Some(t.into())).collect()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new todo with status 1
    async fn create_todo(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Todo>> {
        let todo = resolvers::create_todo(get_store(ctx)?, name).await?;
        Ok(Some(todo.into()))
    }

    /// Overwrite the supplied fields of an existing todo
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: Option<String>,
        status: Option<i32>,
    ) -> async_graphql::Result<Option<Todo>> {
        let args = UpdateTodoArgs { id, name, status };
        let todo = resolvers::update_todo(get_store(ctx)?, args).await?;
        Ok(Some(todo.into()))
    }

    /// Delete a todo, returning its last values
    async fn delete_todo(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<Todo>> {
        let todo = resolvers::delete_todo(get_store(ctx)?, id).await?;
        Ok(Some(todo.into()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};

    use super::*;
    use crate::storage::MemoryTodoStore;

    fn schema() -> TodoSchema {
        build_schema(Arc::new(MemoryTodoStore::new()))
    }

    async fn run(schema: &TodoSchema, document: &str) -> Value {
        let response = schema.execute(document).await;
        serde_json::to_value(&response).unwrap()
    }

    #[tokio::test]
    async fn test_todos_on_empty_store() {
        let result = run(&schema(), "{ todos { id name status } }").await;
        assert_eq!(result, json!({ "data": { "todos": [] } }));
    }

    #[tokio::test]
    async fn test_create_todo_returns_status_one() {
        let result = run(
            &schema(),
            r#"mutation { createTodo(name: "buy milk") { id name status } }"#,
        )
        .await;
        assert_eq!(
            result,
            json!({ "data": { "createTodo": { "id": 1, "name": "buy milk", "status": 1 } } })
        );
    }

    #[tokio::test]
    async fn test_update_then_read_back() {
        let schema = schema();
        run(&schema, r#"mutation { createTodo(name: "walk dog") { id } }"#).await;

        let result = run(
            &schema,
            "mutation { updateTodo(id: 1, status: 2) { id name status } }",
        )
        .await;
        assert_eq!(
            result["data"]["updateTodo"],
            json!({ "id": 1, "name": "walk dog", "status": 2 })
        );

        let result = run(&schema, "{ todo(id: 1) { name status } }").await;
        assert_eq!(
            result["data"]["todo"],
            json!({ "name": "walk dog", "status": 2 })
        );
    }

    #[tokio::test]
    async fn test_delete_then_lookup_fails() {
        let schema = schema();
        run(&schema, r#"mutation { createTodo(name: "temp") { id } }"#).await;

        let result = run(&schema, "mutation { deleteTodo(id: 1) { id name } }").await;
        assert_eq!(
            result["data"]["deleteTodo"],
            json!({ "id": 1, "name": "temp" })
        );

        let result = run(&schema, "{ todo(id: 1) { id } }").await;
        assert_eq!(result["data"]["todo"], Value::Null);
        assert_eq!(result["errors"][0]["message"], "record not found");
    }

    #[tokio::test]
    async fn test_missing_todo_does_not_abort_siblings() {
        let schema = schema();
        run(&schema, r#"mutation { createTodo(name: "kept") { id } }"#).await;

        let result = run(
            &schema,
            "{ missing: todo(id: 42) { id } all: todos { name } }",
        )
        .await;
        assert_eq!(result["data"]["missing"], Value::Null);
        assert_eq!(result["data"]["all"], json!([{ "name": "kept" }]));
        assert_eq!(result["errors"][0]["path"], json!(["missing"]));
    }

    #[tokio::test]
    async fn test_filters_distinguish_zero_from_absent() {
        let schema = schema();
        run(&schema, r#"mutation { createTodo(name: "a") { id } }"#).await;
        run(&schema, r#"mutation { createTodo(name: "b") { id } }"#).await;
        run(&schema, "mutation { updateTodo(id: 2, status: 0) { id } }").await;

        let result = run(&schema, "{ todos(status: 0) { id } }").await;
        assert_eq!(result["data"]["todos"], json!([{ "id": 2 }]));

        let result = run(&schema, "{ todos { id } }").await;
        assert_eq!(result["data"]["todos"], json!([{ "id": 1 }, { "id": 2 }]));

        let result = run(&schema, r#"{ todos(name: "a", status: 1) { id } }"#).await;
        assert_eq!(result["data"]["todos"], json!([{ "id": 1 }]));
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_field_error() {
        let result = run(&schema(), "mutation { deleteTodo(id: 5) { id } }").await;
        assert_eq!(result["data"]["deleteTodo"], Value::Null);
        assert_eq!(result["errors"][0]["message"], "record not found");
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let schema = schema();
        let mut handles = Vec::new();
        for i in 0..16 {
            let schema = schema.clone();
            handles.push(tokio::spawn(async move {
                let document = format!(r#"mutation {{ createTodo(name: "t{i}") {{ id }} }}"#);
                let response = schema.execute(document).await;
                let value = serde_json::to_value(&response).unwrap();
                value["data"]["createTodo"]["id"].as_i64().unwrap()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_sdl_declares_roots() {
        let sdl = schema().sdl();
        assert!(sdl.contains("type Todo"));
        assert!(sdl.contains("todo(id: Int, name: String, status: Int): Todo"));
        assert!(sdl.contains("todos(id: Int, name: String, status: Int): [Todo]\n"));
        assert!(sdl.contains("createTodo(name: String!): Todo"));
        assert!(sdl.contains("updateTodo(id: Int!, name: String, status: Int): Todo"));
        assert!(sdl.contains("deleteTodo(id: Int!): Todo"));
    }
}
