//! HTTP front end for the GraphQL schema.
//!
//! - `GET /graphql` and `POST /graphql` take a `{"query": ...}` JSON body
//! - `GET /` serves GraphiQL against `/graphql`
//! - `GET /health` reports liveness

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQLResponse;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::graphql::{TodoSchema, execute_body};

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn graphql_handler(State(schema): State<TodoSchema>, body: Bytes) -> GraphQLResponse {
    execute_body(&schema, &body).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router(schema: TodoSchema) -> Router {
    Router::new()
        .route("/", get(graphiql))
        .route(GRAPHQL_PATH, get(graphql_handler).post(graphql_handler))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// Binds `host:port`, resolving `host` when it is a name rather than an IP.
pub async fn bind(host: &str, port: u16) -> Result<tokio::net::TcpListener> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(addr = %listener.local_addr()?, host, "GraphQL server listening");
    Ok(listener)
}

pub async fn run_server(schema: TodoSchema, host: &str, port: u16) -> Result<()> {
    let listener = bind(host, port).await?;

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
