use axum::extract::{Form, State};
use std::sync::Arc;

pub fn router(state: Arc<crate::AppState>) -> axum::Router {
    axum::Router::new()
        .route("/games", axum::routing::get(list).post(add))
        .route("/games/rename", axum::routing::post(rename))
        .route("/games/delete", axum::routing::post(delete))
        .with_state(state)
}

#[derive(Debug, serde::Deserialize)]
struct AddGameForm {
    #[serde(default)]
    game_name: String,
}

#[derive(Debug, serde::Deserialize)]
struct RenameGameForm {
    #[serde(default)]
    old_name: String,
    #[serde(default)]
    new_name: String,
}

#[derive(Debug, serde::Deserialize)]
struct DeleteGameForm {
    #[serde(default)]
    name: String,
}

#[tracing::instrument(skip(state))]
async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<axum::response::Html<String>, (axum::http::StatusCode, &'static str)> {
    let board = state.board.lock().await;

    crate::templates::render(crate::templates::GamesPage::new(&board))
}

#[tracing::instrument(skip(state))]
async fn add(
    State(state): State<Arc<crate::AppState>>,
    Form(form): Form<AddGameForm>,
) -> Result<axum::response::Redirect, (axum::http::StatusCode, &'static str)> {
    let game_name = form.game_name.trim();
    if game_name.is_empty() {
        return Err((axum::http::StatusCode::BAD_REQUEST, "game name required"));
    }

    let mut guard = state.board.lock().await;
    let mut board = guard.clone();
    board.add_game(game_name);

    crate::save_and_reload(state.storage.as_ref(), &mut guard, board)
        .await
        .map_err(super::persist_failed)?;

    Ok(axum::response::Redirect::to("/games"))
}

#[tracing::instrument(skip(state))]
async fn rename(
    State(state): State<Arc<crate::AppState>>,
    Form(form): Form<RenameGameForm>,
) -> Result<axum::response::Redirect, (axum::http::StatusCode, &'static str)> {
    let old_name = form.old_name.trim();
    let new_name = form.new_name.trim();
    if old_name.is_empty() || new_name.is_empty() {
        return Err((
            axum::http::StatusCode::BAD_REQUEST,
            "old and new names required",
        ));
    }

    let mut guard = state.board.lock().await;
    let mut board = guard.clone();
    board.rename_game(old_name, new_name);

    crate::save_and_reload(state.storage.as_ref(), &mut guard, board)
        .await
        .map_err(super::persist_failed)?;

    Ok(axum::response::Redirect::to("/games"))
}

#[tracing::instrument(skip(state))]
async fn delete(
    State(state): State<Arc<crate::AppState>>,
    Form(form): Form<DeleteGameForm>,
) -> Result<axum::response::Redirect, (axum::http::StatusCode, &'static str)> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err((axum::http::StatusCode::BAD_REQUEST, "name required"));
    }

    let mut guard = state.board.lock().await;
    let mut board = guard.clone();
    board.remove_game(name);

    crate::save_and_reload(state.storage.as_ref(), &mut guard, board)
        .await
        .map_err(super::persist_failed)?;

    Ok(axum::response::Redirect::to("/games"))
}
