use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::config::ServerSettings;
use crate::error::Result;

use super::schema::VidqlSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql_handler(
    State(schema): State<VidqlSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Mount the schema on `/graphql`.
///
/// With `graphiql` enabled, `GET /graphql` serves the IDE instead of
/// executing the query string.
pub fn router(schema: VidqlSchema, graphiql_enabled: bool) -> Router {
    let route = if graphiql_enabled {
        get(graphiql).post(graphql_handler)
    } else {
        get(graphql_handler).post(graphql_handler)
    };

    Router::new().route(GRAPHQL_PATH, route).with_state(schema)
}

pub async fn run_server(schema: VidqlSchema, settings: &ServerSettings) -> Result<()> {
    let app = router(schema, settings.graphiql);
    let listener = tokio::net::TcpListener::bind(settings.bind_address()).await?;
    let addr = listener.local_addr()?;

    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    if settings.graphiql {
        tracing::info!("GraphiQL: http://{}{}", addr, GRAPHQL_PATH);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataSettings;
    use crate::graphql::build_default_schema;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router(graphiql_enabled: bool) -> Router {
        let schema = build_default_schema(&DataSettings::default());
        router(schema, graphiql_enabled)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_query() {
        let request = Request::builder()
            .method("POST")
            .uri(GRAPHQL_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"query":"{ foo }"}"#))
            .unwrap();

        let response = test_router(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["foo"], "Hello Value");
        assert!(json["extensions"]["runTime"].is_u64());
    }

    #[tokio::test]
    async fn test_get_serves_graphiql() {
        let request = Request::builder()
            .uri(GRAPHQL_PATH)
            .body(Body::empty())
            .unwrap();

        let response = test_router(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8_lossy(&bytes);
        assert!(html.contains("graphiql"));
    }

    #[tokio::test]
    async fn test_get_executes_when_graphiql_disabled() {
        let request = Request::builder()
            .uri("/graphql?query=%7B%20foo%20%7D")
            .body(Body::empty())
            .unwrap();

        let response = test_router(false).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["foo"], "Hello Value");
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let request = Request::builder()
            .uri("/nope")
            .body(Body::empty())
            .unwrap();

        let response = test_router(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
