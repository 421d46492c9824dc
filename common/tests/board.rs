use pretty_assertions::assert_eq;

fn team(name: &str, index: usize) -> common::Team {
    common::Team::new(name, common::color_for_index(index), Vec::new())
}

#[test]
fn add_team_ignores_duplicate_names() {
    let mut board = common::ScoreBoard::new("Game Night");
    board.add_team(team("Red Hawks", 0));
    board.add_team(team("Red Hawks", 1));

    assert_eq!(1, board.teams.len());
    assert_eq!("#D50059", board.teams[0].color_hex());
}

#[test]
fn remove_team_by_name() {
    let mut board = common::ScoreBoard::new("Game Night");
    board.add_team(team("Red Hawks", 0));
    board.add_team(team("Blue Foxes", 1));

    board.remove_team("Red Hawks");

    assert_eq!(1, board.teams.len());
    assert_eq!("Blue Foxes", board.teams[0].name);
}

#[test]
fn add_game_skips_teams_that_already_have_it() {
    let mut board = common::ScoreBoard::new("Game Night");
    board.add_team(team("Red Hawks", 0));
    board.add_team(team("Blue Foxes", 1));

    board.team_mut("Red Hawks").unwrap().games.push({
        let mut game = common::Game::new("Darts");
        game.rounds.insert("1".to_string(), 10);
        game
    });

    board.add_game("Darts");

    let red = board.team("Red Hawks").unwrap();
    assert_eq!(1, red.games.len());
    assert_eq!(10, red.games[0].rounds["1"]);

    let blue = board.team("Blue Foxes").unwrap();
    assert_eq!(1, blue.games.len());
    assert_eq!(0, blue.games[0].rounds.len());
}

#[test]
fn rename_game_across_all_teams() {
    let mut board = common::ScoreBoard::new("Game Night");
    board.add_team(team("Red Hawks", 0));
    board.add_team(team("Blue Foxes", 1));
    board.add_game("Darts");

    board.rename_game("Darts", "Pool");

    for t in board.teams.iter() {
        assert_eq!("Pool", t.games[0].name);
    }
}

#[test]
fn remove_game_across_all_teams() {
    let mut board = common::ScoreBoard::new("Game Night");
    board.add_team(team("Red Hawks", 0));
    board.add_team(team("Blue Foxes", 1));
    board.add_game("Darts");
    board.add_game("Pool");

    board.remove_game("Darts");

    for t in board.teams.iter() {
        assert_eq!(vec!["Pool".to_string()], t.games.iter().map(|g| g.name.clone()).collect::<Vec<_>>());
    }
}

#[test]
fn game_names_are_a_first_seen_union() {
    let mut board = common::ScoreBoard::new("Game Night");
    board.add_team(team("Red Hawks", 0));
    board.add_team(team("Blue Foxes", 1));
    board.add_game("Darts");

    // A game only one team has still shows up once.
    board
        .team_mut("Blue Foxes")
        .unwrap()
        .games
        .push(common::Game::new("Pool"));

    assert_eq!(vec!["Darts".to_string(), "Pool".to_string()], board.game_names());
}

#[test]
fn next_round_starts_at_one() {
    let game = common::Game::new("Darts");

    assert_eq!(1, game.next_round());
}

#[test]
fn next_round_does_not_reuse_gaps() {
    let mut game = common::Game::new("Darts");
    game.rounds.insert("1".to_string(), 10);
    game.rounds.insert("2".to_string(), 7);
    game.rounds.insert("5".to_string(), 3);

    assert_eq!(6, game.next_round());
}

#[test]
fn next_round_ignores_non_numeric_keys() {
    let mut game = common::Game::new("Darts");
    game.rounds.insert("finals".to_string(), 12);

    assert_eq!(1, game.next_round());

    game.rounds.insert("2".to_string(), 4);

    assert_eq!(3, game.next_round());
}

#[test]
fn color_palette_follows_creation_order() {
    let hexes: Vec<String> = (0..5)
        .map(|i| common::color_for_index(i)["color"].clone())
        .collect();

    assert_eq!(
        vec!["#D50059", "#C50000", "#1D03AF", "#FFBB02", "#FFFFFF"],
        hexes
    );
}

#[test]
fn totals_sum_rounds_and_games() {
    let mut board = common::ScoreBoard::new("Game Night");
    board.add_team(team("Red Hawks", 0));
    board.add_game("Darts");
    board.add_game("Pool");

    let t = board.team_mut("Red Hawks").unwrap();
    t.game_mut("Darts").unwrap().rounds.insert("1".to_string(), 10);
    t.game_mut("Darts").unwrap().rounds.insert("2".to_string(), -2);
    t.game_mut("Pool").unwrap().rounds.insert("1".to_string(), 5);

    assert_eq!(8, board.teams[0].game("Darts").unwrap().total());
    assert_eq!(13, board.teams[0].total());
}

#[test]
fn empty_board_detection() {
    assert!(common::ScoreBoard::new("").is_empty());
    assert!(common::ScoreBoard::new("Game Night").is_empty());

    let mut board = common::ScoreBoard::new("Game Night");
    board.add_team(team("Red Hawks", 0));
    assert!(!board.is_empty());
}

#[test]
fn json_uses_the_on_disk_field_names() {
    let mut board = common::ScoreBoard::new("Game Night");
    board.add_team(common::Team::new(
        "Red Hawks",
        common::color_for_index(0),
        vec!["ana".to_string(), "bo".to_string()],
    ));
    board.add_game("Darts");
    board
        .team_mut("Red Hawks")
        .unwrap()
        .game_mut("Darts")
        .unwrap()
        .rounds
        .insert("1".to_string(), 10);

    let value: serde_json::Value = serde_json::to_value(&board).unwrap();

    assert_eq!("Game Night", value["board"]);
    assert_eq!("Red Hawks", value["teams"][0]["team"]);
    assert_eq!("#D50059", value["teams"][0]["color"]["color"]);
    assert_eq!("ana", value["teams"][0]["members"][0]);
    assert_eq!("Darts", value["teams"][0]["games"][0]["game"]);
    assert_eq!(10, value["teams"][0]["games"][0]["rounds"]["1"]);
}

#[test]
fn json_round_trip_preserves_the_document() {
    let mut board = common::ScoreBoard::new("Game Night");
    board.add_team(common::Team::new(
        "Red Hawks",
        common::color_for_index(0),
        vec!["ana".to_string()],
    ));
    board.add_game("Darts");
    board
        .team_mut("Red Hawks")
        .unwrap()
        .game_mut("Darts")
        .unwrap()
        .rounds
        .insert("1".to_string(), 10);

    let encoded = serde_json::to_string_pretty(&board).unwrap();
    let decoded: common::ScoreBoard = serde_json::from_str(&encoded).unwrap();

    assert_eq!(board, decoded);
}
