use super::*;

fn report(winner: Color, local: Option<Color>) -> GameReport {
    GameReport {
        winner,
        local_player: local,
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("checkers_{}_{}.json", name, std::process::id()))
}

#[test]
fn test_new_player_defaults() {
    let mut store = StatsStore::new();
    let p = store.player("alice");
    assert_eq!(p.rating, DEFAULT_RATING);
    assert_eq!(p.games_played, 0);
}

#[test]
fn test_win_and_loss_update_rating() {
    let mut store = StatsStore::new();
    store.apply("alice", &report(Color::White, Some(Color::White)));
    store.apply("alice", &report(Color::White, Some(Color::Black)));

    let p = store.player("alice").clone();
    assert_eq!(p.rating, DEFAULT_RATING + WIN_POINTS - LOSS_POINTS);
    assert_eq!(p.wins, 1);
    assert_eq!(p.losses, 1);
    assert_eq!(p.games_played, 2);
    assert_eq!(store.score, ScoreBoard { white: 2, black: 0 });
}

#[test]
fn test_rating_never_negative() {
    let mut store = StatsStore::new();
    for _ in 0..100 {
        store.apply("bob", &report(Color::Black, Some(Color::White)));
    }
    assert_eq!(store.player("bob").rating, 0);
}

#[test]
fn test_no_local_player_only_counts_colors() {
    let mut store = StatsStore::new();
    store.apply("alice", &report(Color::Black, None));
    assert!(store.players.is_empty());
    assert_eq!(store.score.black, 1);
}

#[test]
fn test_leaderboard_order() {
    let mut store = StatsStore::new();
    store.apply("carol", &report(Color::White, Some(Color::White)));
    store.apply("dave", &report(Color::White, Some(Color::White)));
    store.apply("dave", &report(Color::White, Some(Color::White)));
    store.player("erin");

    let names: Vec<&str> = store
        .leaderboard()
        .iter()
        .map(|p| p.username.as_str())
        .collect();
    assert_eq!(names, vec!["dave", "carol", "erin"]);
    assert!(store.leaderboard_report().contains("dave"));
}

#[test]
fn test_recorder_persists_to_disk() {
    let path = temp_path("recorder");
    let _ = std::fs::remove_file(&path);

    let mut recorder = StatsRecorder::new(&path, "alice");
    recorder
        .record(&report(Color::Black, Some(Color::Black)))
        .unwrap();
    recorder
        .record(&report(Color::White, Some(Color::Black)))
        .unwrap();

    let mut store = StatsStore::load(&path).unwrap();
    assert_eq!(store.player("alice").wins, 1);
    assert_eq!(store.player("alice").losses, 1);
    assert_eq!(store.score, ScoreBoard { white: 1, black: 1 });

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_corrupt_file_is_reported() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(StatsStore::load(&path), Err(StatsError::Json(_))));

    let mut recorder = StatsRecorder::new(&path, "alice");
    assert!(recorder.record(&report(Color::White, None)).is_err());

    std::fs::remove_file(&path).unwrap();
}
