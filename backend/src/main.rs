use backend::store::BoardStorage;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend") || meta.target().contains("tower_http")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    tracing::info!("Starting...");

    let config = backend::config::Config::from_env();
    let storage = backend::store::JsonFileStorage::new(config.board_file());

    let board = match storage.load().await {
        Ok(board) => board,
        Err(e) => {
            tracing::error!("Loading board: {:?}", e);
            common::ScoreBoard::new("Default Board")
        }
    };

    let state = std::sync::Arc::new(backend::AppState::new(Box::new(storage), board));

    let router = backend::pages::router(state)
        .nest_service(
            "/static",
            tower_http::services::ServeDir::new("static/"),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, router).await.unwrap();
}
