//! End-to-end replays of recorded action logs.

use std::io::Write;
use std::path::{Path, PathBuf};

use game_content::{MapLoader, presets};
use game_core::{GameController, GameRules, Position};
use runtime::{ActionRecord, ActionType, CsvActionSource, InMemoryActionSource, Interactor};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn season_game(rules: GameRules) -> GameController {
    let layout = MapLoader::load(&data_dir().join("maps/season.ron")).expect("map should load");
    layout.build(rules).expect("map should build")
}

fn replay_season() -> GameController {
    let mut game = season_game(presets::classic());
    let mut source =
        CsvActionSource::open(data_dir().join("actions/season.csv")).expect("log should open");
    let summary = Interactor::new(&mut game)
        .take_actions(&mut source)
        .expect("season should replay");
    assert_eq!(summary.actions, 12);
    assert_eq!(summary.days, 3);
    game
}

#[test]
fn season_log_reaches_expected_state() {
    let game = replay_season();

    let ryan = game.tank("Ryan").unwrap();
    assert_eq!(ryan.position, Position::new(2, 3));
    assert_eq!(ryan.lives, 2);
    assert_eq!(ryan.ap, 2);
    assert_eq!(ryan.gold, 4);

    let beyer = game.tank("Beyer").unwrap();
    assert_eq!(beyer.range, 3);
    assert_eq!(beyer.ap, 2);
    assert_eq!(beyer.gold, 14);
    assert_eq!(beyer.total_gold, 20);

    let cole = game.tank("Cole").unwrap();
    assert_eq!(cole.position, Position::new(5, 5));
    assert_eq!(cole.ap, 1);

    let dana = game.tank("Dn").unwrap();
    assert_eq!(dana.position, Position::new(1, 6));
    assert_eq!(dana.lives, 3);

    assert_eq!(game.walls()[1].durability, 0);
}

#[test]
fn replays_are_deterministic() {
    assert_eq!(replay_season(), replay_season());
}

#[test]
fn council_season_trades_and_taxed_transfers() {
    let mut game = GameController::new(5, 5, presets::council_season().with_starting_gold(6));
    game.add_tank(Position::new(0, 0), "Ryan", None).unwrap();
    game.add_tank(Position::new(1, 1), "Beyer", None).unwrap();

    let log = "\
date,actor,action_type,target,metadata
d1,Ryan,trade,,3
d1,Ryan,trade,,4
d1,Beyer,transfer_gold,Ryan,1
";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(log.as_bytes()).unwrap();

    let mut source = CsvActionSource::open(file.path()).unwrap();
    Interactor::new(&mut game).take_actions(&mut source).unwrap();

    let ryan = game.tank("Ryan").unwrap();
    assert_eq!(ryan.ap, 3);
    assert_eq!(ryan.gold, 4);
    assert_eq!(game.tank("Beyer").unwrap().gold, 4);
    assert_eq!(game.council().coffer(), 1);

    let mut source = InMemoryActionSource::new([ActionRecord::new(
        "d2",
        "Beyer",
        ActionType::TransferGold,
        "Ryan",
        "2",
    )]);
    let mut interactor = Interactor::new(&mut game);
    interactor.take_actions(&mut source).unwrap();
    assert_eq!(interactor.current_date(), Some("d2"));

    assert_eq!(game.tank("Beyer").unwrap().gold, 1);
    assert_eq!(game.tank("Ryan").unwrap().gold, 6);
    assert_eq!(game.council().coffer(), 2);
}

#[test]
fn kill_in_replay_removes_tank_and_pays_out() {
    let mut game = GameController::new(5, 5, GameRules::default());
    game.add_tank(Position::new(0, 0), "Ryan", None).unwrap();
    game.add_tank(Position::new(1, 0), "Beyer", None).unwrap();

    let shots = ["d1", "d2", "d3"]
        .into_iter()
        .map(|date| ActionRecord::new(date, "Ryan", ActionType::Fire, "b1", "hit"));
    let mut source = InMemoryActionSource::new(shots);
    Interactor::new(&mut game).take_actions(&mut source).unwrap();

    let beyer = game.tank("Beyer").unwrap();
    assert!(!beyer.is_alive());
    assert_eq!(beyer.ap, 0);

    let ryan = game.tank("Ryan").unwrap();
    assert_eq!(ryan.kills, 1);
    assert_eq!(ryan.gold, 3);
    assert_eq!(game.board().occupant(Position::new(1, 0)), Ok(None));
}
