use async_graphql::{Request, Response, Variables};
use serde::Deserialize;

use super::schema::TodoSchema;

/// JSON body carried by a request to `/graphql`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryBody {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub variables: Option<serde_json::Value>,
    #[serde(default)]
    pub operation_name: Option<String>,
}

impl QueryBody {
    /// Decodes a request body. A malformed body is logged and replaced by an
    /// empty document, which then fails to parse during execution.
    pub fn parse(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed GraphQL request body");
                Self::default()
            }
        }
    }

    pub fn into_request(self) -> Request {
        let mut request = Request::new(self.query);
        if let Some(vars) = self.variables {
            request = request.variables(Variables::from_json(vars));
        }
        if let Some(name) = self.operation_name {
            request = request.operation_name(name);
        }
        request
    }
}

/// Executes the document held in a raw request body.
pub async fn execute_body(schema: &TodoSchema, body: &[u8]) -> Response {
    execute(schema, QueryBody::parse(body).into_request()).await
}

pub async fn execute(schema: &TodoSchema, request: Request) -> Response {
    let response = schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "Document finished with errors");
    }
    response
}
