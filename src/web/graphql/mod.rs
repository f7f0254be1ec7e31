//! GraphQL surface over the record store.
//!
//! `GET /graphql` serves the GraphiQL explorer, `POST /graphql` executes.

mod mutation;
mod query;
mod types;

use crate::model::ModelManager;
use async_graphql::{http::GraphiQLSource, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

pub use self::mutation::MutationRoot;
pub use self::query::QueryRoot;

pub const GRAPHQL_PATH: &str = "/graphql";

pub type AutomotiveSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(mm: ModelManager) -> AutomotiveSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(mm)
        .finish()
}

pub fn routes(mm: ModelManager) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .with_state(build_schema(mm))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn graphql_handler(
    State(schema): State<AutomotiveSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}
