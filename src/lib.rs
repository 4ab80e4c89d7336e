//! # todo-graphql - a GraphQL API over a single Todo table
//!
//! Todos (`id`, `name`, `status`) are stored in one Postgres table and exposed
//! through a GraphQL schema served at `/graphql`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server against Postgres
//! DATABASE_URL=postgres://todo@localhost/todos todo-graphql serve
//!
//! # Create a todo
//! curl -X GET localhost:8080/graphql \
//!   -d '{"query": "mutation { createTodo(name: \"buy milk\") { id status } }"}'
//!
//! # Try it without a database
//! todo-graphql query --in-memory '{ todos { id name status } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and document execution
//! - [`model`]: Data models (`Todo`, `TodoFilter`, ...)
//! - [`server`]: HTTP routes
//! - [`storage`]: Postgres and in-memory stores

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads an optional `todo-graphql.toml`, overridden by env vars and flags.
pub mod config;

/// Error types and result aliases.
///
/// Defines `TodoError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
pub mod graphql;

pub mod logging;

/// Data models for todos.
pub mod model;

pub mod server;

/// Storage layer.
///
/// Postgres via sqlx, plus an in-memory store.
pub mod storage;
