pub fn render<T>(
    template: T,
) -> Result<axum::response::Html<String>, (axum::http::StatusCode, &'static str)>
where
    T: askama::Template,
{
    match template.render() {
        Ok(html) => Ok(axum::response::Html(html)),
        Err(e) => {
            tracing::error!("Rendering template: {:?}", e);
            Err((
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "failed to render page",
            ))
        }
    }
}

pub struct RoundView {
    pub name: String,
    pub score: i64,
}

pub struct GameView {
    pub name: String,
    pub rounds: Vec<RoundView>,
    pub total: i64,
    pub next_round: i64,
}

impl GameView {
    pub fn from_game(game: &common::Game) -> Self {
        let mut rounds: Vec<RoundView> = game
            .rounds
            .iter()
            .map(|(name, score)| RoundView {
                name: name.clone(),
                score: *score,
            })
            .collect();

        // Numbered rounds first in order, named rounds after.
        rounds.sort_by(|a, b| match (a.name.parse::<i64>(), b.name.parse::<i64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            (Ok(_), Err(_)) => std::cmp::Ordering::Less,
            (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
            (Err(_), Err(_)) => a.name.cmp(&b.name),
        });

        Self {
            name: game.name.clone(),
            rounds,
            total: game.total(),
            next_round: game.next_round(),
        }
    }
}

pub struct TeamView {
    pub name: String,
    pub color: String,
    pub link: String,
    pub members: Vec<String>,
    pub games: Vec<GameView>,
    pub total: i64,
}

impl TeamView {
    pub fn from_team(team: &common::Team) -> Self {
        Self {
            name: team.name.clone(),
            color: team.color_hex().to_string(),
            link: format!("/board/team/{}", crate::path_escape(&team.name)),
            members: team.members.clone(),
            games: team.games.iter().map(GameView::from_game).collect(),
            total: team.total(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "home.html")]
pub struct HomePage {}

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutPage {}

#[derive(askama::Template)]
#[template(path = "board.html")]
pub struct BoardPage {
    pub name: String,
    pub teams: Vec<TeamView>,
}

impl BoardPage {
    pub fn new(board: &common::ScoreBoard) -> Self {
        Self {
            name: board.name.clone(),
            teams: board.teams.iter().map(TeamView::from_team).collect(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "new_board.html")]
pub struct NewBoardPage {}

pub struct SettingsRow {
    pub index: usize,
    pub name: String,
    pub members: String,
}

#[derive(askama::Template)]
#[template(path = "settings.html")]
pub struct SettingsPage {
    pub name: String,
    pub rows: Vec<SettingsRow>,
}

impl SettingsPage {
    pub fn new(board: &common::ScoreBoard) -> Self {
        let rows = (0..4)
            .map(|i| {
                let team = board.teams.get(i);
                SettingsRow {
                    index: i + 1,
                    name: team.map(|t| t.name.clone()).unwrap_or_default(),
                    members: team.map(|t| t.members.join(", ")).unwrap_or_default(),
                }
            })
            .collect();

        Self {
            name: board.name.clone(),
            rows,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "games.html")]
pub struct GamesPage {
    pub games: Vec<String>,
    pub has_teams: bool,
}

impl GamesPage {
    pub fn new(board: &common::ScoreBoard) -> Self {
        Self {
            games: board.game_names(),
            has_teams: !board.teams.is_empty(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "team_scores.html")]
pub struct TeamScoresPage {
    pub team: TeamView,
}

impl TeamScoresPage {
    pub fn new(team: &common::Team) -> Self {
        Self {
            team: TeamView::from_team(team),
        }
    }
}
