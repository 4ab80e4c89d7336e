//! Data models for todos.
//!
//! - [`Todo`]: a persisted todo row
//! - [`NewTodo`]: a todo awaiting an id from the store
//! - [`TodoFilter`]: optional equality predicates used by lookups
//! - [`TodoChanges`]: optional field overwrites used by updates

mod todo;

pub use todo::{DEFAULT_STATUS, NewTodo, Todo, TodoChanges, TodoFilter};
