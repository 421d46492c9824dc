pub fn router() -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(home))
        .route("/about", axum::routing::get(about))
        .route("/ping", axum::routing::get(ping))
}

#[tracing::instrument]
async fn home() -> Result<axum::response::Html<String>, (axum::http::StatusCode, &'static str)> {
    crate::templates::render(crate::templates::HomePage {})
}

#[tracing::instrument]
async fn about() -> Result<axum::response::Html<String>, (axum::http::StatusCode, &'static str)> {
    crate::templates::render(crate::templates::AboutPage {})
}

async fn ping() -> &'static str {
    "."
}
