use axum::extract::{Form, Path, State};
use axum::response::IntoResponse;
use std::sync::Arc;

pub fn router(state: Arc<crate::AppState>) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(show))
        .route("/new", axum::routing::get(new_form).post(create))
        .route("/team/:team", axum::routing::get(team_scores))
        .route("/team/:team/scores", axum::routing::post(update_score))
        .route("/team/:team/scores/bulk", axum::routing::post(bulk_update))
        .route("/team/:team/scores/delete", axum::routing::post(delete_round))
        .with_state(state)
}

fn team_redirect(team_name: &str) -> axum::response::Redirect {
    axum::response::Redirect::to(&format!("/board/team/{}", crate::path_escape(team_name)))
}

#[tracing::instrument(skip(state))]
async fn show(
    State(state): State<Arc<crate::AppState>>,
) -> Result<axum::response::Response, (axum::http::StatusCode, &'static str)> {
    let board = state.board.lock().await;

    if board.is_empty() {
        return Ok(axum::response::Redirect::to("/board/new").into_response());
    }

    Ok(crate::templates::render(crate::templates::BoardPage::new(&board))?.into_response())
}

#[tracing::instrument]
async fn new_form(
) -> Result<axum::response::Html<String>, (axum::http::StatusCode, &'static str)> {
    crate::templates::render(crate::templates::NewBoardPage {})
}

#[tracing::instrument(skip(state))]
async fn create(
    State(state): State<Arc<crate::AppState>>,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<axum::response::Redirect, (axum::http::StatusCode, &'static str)> {
    let board_name = super::first_value(&form, "board_name");
    if board_name.is_empty() {
        return Err((axum::http::StatusCode::BAD_REQUEST, "board name required"));
    }

    let mut board = common::ScoreBoard::new(board_name);
    for team in super::teams_from_form(&form) {
        board.add_team(team);
    }

    let mut guard = state.board.lock().await;
    crate::save_and_reload(state.storage.as_ref(), &mut guard, board)
        .await
        .map_err(super::persist_failed)?;

    Ok(axum::response::Redirect::to("/board"))
}

#[tracing::instrument(skip(state))]
async fn team_scores(
    State(state): State<Arc<crate::AppState>>,
    Path(team_name): Path<String>,
) -> Result<axum::response::Html<String>, (axum::http::StatusCode, &'static str)> {
    let board = state.board.lock().await;

    let team = board
        .team(&team_name)
        .ok_or((axum::http::StatusCode::NOT_FOUND, "team not found"))?;

    crate::templates::render(crate::templates::TeamScoresPage::new(team))
}

#[derive(Debug, serde::Deserialize)]
struct ScoreForm {
    #[serde(default)]
    game_name: String,
    #[serde(default)]
    round_name: String,
    #[serde(default)]
    score: String,
}

/// Upserts one round score. An empty round name auto-numbers the round.
#[tracing::instrument(skip(state))]
async fn update_score(
    State(state): State<Arc<crate::AppState>>,
    Path(team_name): Path<String>,
    Form(form): Form<ScoreForm>,
) -> Result<axum::response::Redirect, (axum::http::StatusCode, &'static str)> {
    let game_name = form.game_name.trim();
    let round_name = form.round_name.trim();
    let score_raw = form.score.trim();

    if game_name.is_empty() || score_raw.is_empty() {
        return Err((
            axum::http::StatusCode::BAD_REQUEST,
            "game and score required",
        ));
    }

    let mut guard = state.board.lock().await;
    let mut board = guard.clone();

    let team = board
        .team_mut(&team_name)
        .ok_or((axum::http::StatusCode::NOT_FOUND, "team not found"))?;
    let game = team.game_mut(game_name).ok_or((
        axum::http::StatusCode::BAD_REQUEST,
        "game does not exist; add it in Games",
    ))?;

    let round = if round_name.is_empty() {
        game.next_round().to_string()
    } else {
        round_name.to_string()
    };

    let score: i64 = match score_raw.parse() {
        Ok(s) => s,
        Err(_) => {
            return Err((
                axum::http::StatusCode::BAD_REQUEST,
                "score must be a number",
            ))
        }
    };

    game.rounds.insert(round, score);

    crate::save_and_reload(state.storage.as_ref(), &mut guard, board)
        .await
        .map_err(super::persist_failed)?;

    Ok(team_redirect(&team_name))
}

/// Updates multiple rounds at once. The form carries repeated `round_name`
/// and `score` fields, paired by order; blank or unparseable pairs are
/// skipped.
#[tracing::instrument(skip(state))]
async fn bulk_update(
    State(state): State<Arc<crate::AppState>>,
    Path(team_name): Path<String>,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<axum::response::Redirect, (axum::http::StatusCode, &'static str)> {
    let game_name = super::first_value(&form, "game_name").trim().to_string();
    if game_name.is_empty() {
        return Err((axum::http::StatusCode::BAD_REQUEST, "game required"));
    }

    let mut guard = state.board.lock().await;
    let mut board = guard.clone();

    let team = board
        .team_mut(&team_name)
        .ok_or((axum::http::StatusCode::NOT_FOUND, "team not found"))?;
    let game = team.game_mut(&game_name).ok_or((
        axum::http::StatusCode::BAD_REQUEST,
        "game does not exist; add it in Games",
    ))?;

    let round_names: Vec<&str> = form
        .iter()
        .filter(|(k, _)| k == "round_name")
        .map(|(_, v)| v.as_str())
        .collect();
    let scores: Vec<&str> = form
        .iter()
        .filter(|(k, _)| k == "score")
        .map(|(_, v)| v.as_str())
        .collect();

    for (round, score) in round_names.iter().zip(scores.iter()) {
        let round = round.trim();
        let score = score.trim();
        if round.is_empty() || score.is_empty() {
            continue;
        }

        let value: i64 = match score.parse() {
            Ok(v) => v,
            Err(_) => continue,
        };

        game.rounds.insert(round.to_string(), value);
    }

    crate::save_and_reload(state.storage.as_ref(), &mut guard, board)
        .await
        .map_err(super::persist_failed)?;

    Ok(team_redirect(&team_name))
}

#[derive(Debug, serde::Deserialize)]
struct DeleteRoundForm {
    #[serde(default)]
    game_name: String,
    #[serde(default)]
    round_name: String,
}

#[tracing::instrument(skip(state))]
async fn delete_round(
    State(state): State<Arc<crate::AppState>>,
    Path(team_name): Path<String>,
    Form(form): Form<DeleteRoundForm>,
) -> Result<axum::response::Redirect, (axum::http::StatusCode, &'static str)> {
    let game_name = form.game_name.trim();
    let round_name = form.round_name.trim();
    if game_name.is_empty() || round_name.is_empty() {
        return Err((
            axum::http::StatusCode::BAD_REQUEST,
            "game and round required",
        ));
    }

    let mut guard = state.board.lock().await;
    let mut board = guard.clone();

    let team = board
        .team_mut(&team_name)
        .ok_or((axum::http::StatusCode::NOT_FOUND, "team not found"))?;
    if let Some(game) = team.game_mut(game_name) {
        game.rounds.remove(round_name);
    }

    crate::save_and_reload(state.storage.as_ref(), &mut guard, board)
        .await
        .map_err(super::persist_failed)?;

    Ok(team_redirect(&team_name))
}
