pub mod board;
pub mod games;
pub mod home;
pub mod settings;

use std::sync::Arc;

pub fn router(state: Arc<crate::AppState>) -> axum::Router {
    axum::Router::new()
        .merge(home::router())
        .merge(games::router(state.clone()))
        .merge(settings::router(state.clone()))
        .nest("/board", board::router(state))
}

pub(crate) fn persist_failed(err: String) -> (axum::http::StatusCode, &'static str) {
    tracing::error!("Persisting board: {:?}", err);
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        "failed to persist board",
    )
}

/// First value for the key, empty when the field was not submitted.
pub fn first_value<'f>(form: &'f [(String, String)], key: &str) -> &'f str {
    form.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

/// Splits a comma separated member list, dropping blanks.
pub fn split_members(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

/// Reads the up-to-four numbered team field pairs. Rows without a name are
/// skipped, palette colors are assigned by accepted order.
pub fn teams_from_form(form: &[(String, String)]) -> Vec<common::Team> {
    let mut teams = Vec::new();

    for i in 1..=4 {
        let name = first_value(form, &format!("team_name_{}", i)).trim();
        let members = split_members(first_value(form, &format!("team_members_{}", i)));

        if name.is_empty() {
            continue;
        }

        teams.push(common::Team::new(
            name,
            common::color_for_index(teams.len()),
            members,
        ));
    }

    teams
}
