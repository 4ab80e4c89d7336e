//! GraphQL schema and resolvers for todos.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! todo-graphql serve --port 8080
//!
//! # Execute a query from CLI
//! todo-graphql query '{ todos(status: 1) { id name } }'
//!
//! # Execute a mutation from CLI
//! todo-graphql mutate 'createTodo(name: "buy milk") { id status }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `todo`, `todos`
//! - **Mutations**: `createTodo`, `updateTodo`, `deleteTodo`

mod executor;
mod resolvers;
mod schema;
mod types;

pub use executor::{QueryBody, execute, execute_body};
pub use schema::{MutationRoot, QueryRoot, TodoSchema, build_schema};
pub use types::*;
