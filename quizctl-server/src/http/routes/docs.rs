//! API documentation: the bundled OpenAPI description and a Redoc page for it

use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::{routing::get, Router};

const OPENAPI_YAML: &str = include_str!("../../../openapi/openapi.yaml");

const REDOC_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>quizctl API</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
  </head>
  <body>
    <redoc spec-url="/swagger.yaml"></redoc>
    <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
  </body>
</html>
"#;

/// GET /swagger.yaml
async fn openapi() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/yaml")], OPENAPI_YAML)
}

/// GET /docs
async fn redoc() -> Html<&'static str> {
    Html(REDOC_HTML)
}

/// Documentation routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/swagger.yaml", get(openapi))
        .route("/docs", get(redoc))
}
