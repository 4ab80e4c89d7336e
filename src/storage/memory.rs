use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TodoStore;
use crate::{
    error::{Result, TodoError},
    model::{NewTodo, Todo, TodoFilter},
};

/// Volatile store keeping todos in a map keyed by id.
///
/// Ids come from an atomic counter starting at 1, so they are never reused,
/// even after a delete.
#[derive(Debug)]
pub struct MemoryTodoStore {
    todos: RwLock<BTreeMap<i32, Todo>>,
    next_id: AtomicI32,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn find_first(&self, filter: &TodoFilter) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().find(|t| filter.matches(t)).cloned())
    }

    async fn find_all(&self, filter: &TodoFilter) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        if filter.is_empty() {
            return Ok(todos.values().cloned().collect());
        }
        Ok(todos.values().filter(|t| filter.matches(t)).cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Todo>> {
        Ok(self.todos.read().await.get(&id).cloned())
    }

    async fn insert(&self, todo: NewTodo) -> Result<Todo> {
        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(|_| TodoError::IdsExhausted)?;
        let todo = todo.into_todo(id);
        tracing::debug!(id, name = %todo.name, "Inserted todo in memory");
        self.todos.write().await.insert(id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        let slot = todos.get_mut(&todo.id).ok_or(TodoError::NotFound)?;
        *slot = todo.clone();
        Ok(todo.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.todos.write().await.remove(&id).is_some())
    }
}
