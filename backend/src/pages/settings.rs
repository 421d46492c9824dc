use axum::extract::{Form, State};
use std::sync::Arc;

pub fn router(state: Arc<crate::AppState>) -> axum::Router {
    axum::Router::new()
        .route("/settings", axum::routing::get(show).post(update))
        .route("/settings/reset", axum::routing::post(reset))
        .with_state(state)
}

#[tracing::instrument(skip(state))]
async fn show(
    State(state): State<Arc<crate::AppState>>,
) -> Result<axum::response::Html<String>, (axum::http::StatusCode, &'static str)> {
    let board = state.board.lock().await;

    crate::templates::render(crate::templates::SettingsPage::new(&board))
}

/// Rebuilds the board wholesale from the posted fields.
#[tracing::instrument(skip(state))]
async fn update(
    State(state): State<Arc<crate::AppState>>,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<axum::response::Redirect, (axum::http::StatusCode, &'static str)> {
    let mut board_name = super::first_value(&form, "board_name").trim();
    if board_name.is_empty() {
        board_name = "Untitled Board";
    }

    let mut updated = common::ScoreBoard::new(board_name);
    for team in super::teams_from_form(&form) {
        updated.add_team(team);
    }

    let mut guard = state.board.lock().await;
    crate::save_and_reload(state.storage.as_ref(), &mut guard, updated)
        .await
        .map_err(super::persist_failed)?;

    Ok(axum::response::Redirect::to("/board"))
}

#[tracing::instrument(skip(state))]
async fn reset(
    State(state): State<Arc<crate::AppState>>,
) -> Result<axum::response::Redirect, (axum::http::StatusCode, &'static str)> {
    if let Err(e) = state.storage.reset().await {
        tracing::error!("Deleting board file: {:?}", e);
    }

    // Clear the in-memory board too, so navigation does not show stale data.
    *state.board.lock().await = common::ScoreBoard::new("");

    Ok(axum::response::Redirect::to("/board/new"))
}
