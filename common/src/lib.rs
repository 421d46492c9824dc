use std::collections::HashMap;

/// Creation-order team colors, 4 slots.
pub static DEFAULT_COLORS: [(&str, &str); 4] = [
    ("pink", "#D50059"),
    ("red", "#C50000"),
    ("blue", "#1D03AF"),
    ("yellow", "#FFBB02"),
];

pub const FALLBACK_COLOR: &str = "#FFFFFF";

pub fn color_for_index(index: usize) -> HashMap<String, String> {
    let hex = DEFAULT_COLORS
        .get(index)
        .map(|(_, hex)| *hex)
        .unwrap_or(FALLBACK_COLOR);

    let mut color = HashMap::new();
    color.insert("color".to_string(), hex.to_string());
    color
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreBoard {
    #[serde(rename = "board")]
    pub name: String,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Team {
    #[serde(rename = "team")]
    pub name: String,
    #[serde(default)]
    pub color: HashMap<String, String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Game {
    #[serde(rename = "game")]
    pub name: String,
    #[serde(default)]
    pub rounds: HashMap<String, i64>,
}

impl ScoreBoard {
    pub fn new<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            teams: Vec::new(),
        }
    }

    /// A board without a name or without teams is not usable yet.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() || self.teams.is_empty()
    }

    /// Appends the team, unless one with the same name already exists.
    pub fn add_team(&mut self, team: Team) {
        if self.teams.iter().any(|t| t.name == team.name) {
            return;
        }
        self.teams.push(team);
    }

    pub fn remove_team(&mut self, name: &str) {
        self.teams.retain(|t| t.name != name);
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn team_mut(&mut self, name: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.name == name)
    }

    /// Adds the game to every team that does not already have it.
    pub fn add_game(&mut self, name: &str) {
        for team in self.teams.iter_mut() {
            if team.games.iter().any(|g| g.name == name) {
                continue;
            }
            team.games.push(Game::new(name));
        }
    }

    /// Renames the game in every team where it is present.
    pub fn rename_game(&mut self, old_name: &str, new_name: &str) {
        for team in self.teams.iter_mut() {
            for game in team.games.iter_mut() {
                if game.name == old_name {
                    game.name = new_name.to_string();
                }
            }
        }
    }

    /// Removes the game from every team.
    pub fn remove_game(&mut self, name: &str) {
        for team in self.teams.iter_mut() {
            team.games.retain(|g| g.name != name);
        }
    }

    /// All game names across teams, in first-seen order.
    pub fn game_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for team in self.teams.iter() {
            for game in team.games.iter() {
                if !names.iter().any(|n| n == &game.name) {
                    names.push(game.name.clone());
                }
            }
        }
        names
    }
}

impl Team {
    pub fn new<N>(name: N, color: HashMap<String, String>, members: Vec<String>) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            color,
            members,
            games: Vec::new(),
        }
    }

    pub fn game(&self, name: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.name == name)
    }

    pub fn game_mut(&mut self, name: &str) -> Option<&mut Game> {
        self.games.iter_mut().find(|g| g.name == name)
    }

    pub fn color_hex(&self) -> &str {
        self.color
            .get("color")
            .map(|h| h.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn total(&self) -> i64 {
        self.games.iter().map(|g| g.total()).sum()
    }
}

impl Game {
    pub fn new<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            rounds: HashMap::new(),
        }
    }

    /// Next round number: max of the numeric round keys + 1, starting at 1.
    /// Gaps left by deleted rounds are not reused.
    pub fn next_round(&self) -> i64 {
        self.rounds
            .keys()
            .filter_map(|k| k.parse::<i64>().ok())
            .max()
            .map(|max| max + 1)
            .unwrap_or(1)
    }

    pub fn total(&self) -> i64 {
        self.rounds.values().sum()
    }
}
