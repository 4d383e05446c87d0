use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{warn, Level};

use common::types::Health;

use crate::graphql::CatalogSchema;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn graphql(
    State(schema): State<CatalogSchema>,
    Json(req): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let res = schema.execute(req).await;
    if !res.errors.is_empty() {
        let messages: Vec<&str> = res.errors.iter().map(|e| e.message.as_str()).collect();
        warn!(errors = ?messages, "graphql request returned errors");
    }
    Json(res)
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Build the application router: health probe plus the GraphQL endpoint
pub fn build_router(schema: CatalogSchema, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/graphql", get(graphiql).post(graphql))
        .with_state(schema)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
