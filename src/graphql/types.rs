use crate::model::{Todo as ModelTodo, TodoChanges, TodoFilter};
use async_graphql::SimpleObject;

/// Output shape of a todo. Every field is nullable so partial projections
/// and failed lookups never force a null up to the parent.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub status: Option<i32>,
}

impl From<ModelTodo> for Todo {
    fn from(t: ModelTodo) -> Self {
        Self {
            id: Some(t.id),
            name: Some(t.name),
            status: Some(t.status),
        }
    }
}

/// Arguments shared by `todo` and `todos`.
#[derive(Debug, Clone, Default)]
pub struct TodoLookupArgs {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub status: Option<i32>,
}

impl From<TodoLookupArgs> for TodoFilter {
    fn from(args: TodoLookupArgs) -> Self {
        Self {
            id: args.id,
            name: args.name,
            status: args.status,
        }
    }
}

/// Arguments of `updateTodo`.
#[derive(Debug, Clone)]
pub struct UpdateTodoArgs {
    pub id: i32,
    pub name: Option<String>,
    pub status: Option<i32>,
}

impl UpdateTodoArgs {
    pub fn changes(&self) -> TodoChanges {
        TodoChanges {
            name: self.name.clone(),
            status: self.status,
        }
    }
}
