use serde::{Deserialize, Serialize};

/// Status given to every todo on creation.
pub const DEFAULT_STATUS: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i32,
    pub name: String,
    pub status: i32,
}

/// A todo that has not been persisted yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub status: i32,
}

impl NewTodo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DEFAULT_STATUS,
        }
    }

    pub fn into_todo(self, id: i32) -> Todo {
        Todo {
            id,
            name: self.name,
            status: self.status,
        }
    }
}

/// Equality predicates for looking todos up.
///
/// A `None` field imposes no constraint, so `Some(0)` and `Some(String::new())`
/// are real filters rather than "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub status: Option<i32>,
}

impl TodoFilter {
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none() && self.status.is_none()
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        self.id.is_none_or(|id| todo.id == id)
            && self.name.as_deref().is_none_or(|name| todo.name == name)
            && self.status.is_none_or(|status| todo.status == status)
    }
}

/// Fields to overwrite on an existing todo. Unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub name: Option<String>,
    pub status: Option<i32>,
}

impl TodoChanges {
    pub fn apply(self, todo: &mut Todo) {
        if let Some(name) = self.name {
            todo.name = name;
        }
        if let Some(status) = self.status {
            todo.status = status;
        }
    }
}
