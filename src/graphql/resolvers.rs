//! Resolver implementations, one store operation each.
//!
//! These take plain argument structures and a store handle so the schema in
//! [`super::schema`] only has to declare fields and forward to them.

use crate::error::{Result, TodoError};
use crate::model::{NewTodo, Todo, TodoFilter};
use crate::storage::TodoStore;

use super::types::{TodoLookupArgs, UpdateTodoArgs};

pub async fn todo(store: &dyn TodoStore, args: TodoLookupArgs) -> Result<Todo> {
    let filter = TodoFilter::from(args);
    store.find_first(&filter).await?.ok_or(TodoError::NotFound)
}

pub async fn todos(store: &dyn TodoStore, args: TodoLookupArgs) -> Result<Vec<Todo>> {
    store.find_all(&TodoFilter::from(args)).await
}

pub async fn create_todo(store: &dyn TodoStore, name: String) -> Result<Todo> {
    store.insert(NewTodo::new(name)).await
}

pub async fn update_todo(store: &dyn TodoStore, args: UpdateTodoArgs) -> Result<Todo> {
    let mut todo = store.find_by_id(args.id).await?.ok_or(TodoError::NotFound)?;
    args.changes().apply(&mut todo);
    store.update(&todo).await
}

/// Removes the todo and returns its values as they were before deletion.
pub async fn delete_todo(store: &dyn TodoStore, id: i32) -> Result<Todo> {
    let todo = store.find_by_id(id).await?.ok_or(TodoError::NotFound)?;
    if !store.delete(id).await? {
        // Removed by a concurrent request between lookup and delete.
        return Err(TodoError::NotFound);
    }
    Ok(todo)
}
