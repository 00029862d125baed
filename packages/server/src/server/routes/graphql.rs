use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::{graphiql::graphiql_source, GraphQLBatchRequest, GraphQLRequest};
use serde::Serialize;

use crate::server::graphql::{GraphQLContext, Schema};

/// Field errors still answer 200; only requests juniper could not run at all
/// (parse or validation failures) answer 400.
fn respond(ok: bool, body: impl Serialize) -> Response {
    let status = if ok { StatusCode::OK } else { StatusCode::BAD_REQUEST };
    (status, Json(body)).into_response()
}

pub async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    let response = request.execute(&schema, &context).await;
    respond(response.is_ok(), response)
}

pub async fn graphql_batch_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(batch): Json<GraphQLBatchRequest>,
) -> Response {
    let response = batch.execute(&schema, &context).await;
    respond(response.is_ok(), response)
}

pub async fn graphql_playground() -> Html<String> {
    Html(graphiql_source("/graphql", None))
}
