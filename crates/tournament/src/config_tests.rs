use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    let cfg = AppConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.rules(), RuleOptions::default());
}

#[test]
fn test_partial_file_overrides() {
    let cfg = AppConfig::from_toml_str(
        r#"
        player_color = "black"
        difficulty = "easy"
        seed = 42
        blocked_side_loses = true
        "#,
    )
    .unwrap();
    assert_eq!(cfg.player_color, Color::Black);
    assert_eq!(cfg.difficulty, Difficulty::Easy);
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.username, "player");
    assert!(cfg.rules().blocked_side_loses);
}

#[test]
fn test_bad_values_are_errors() {
    assert!(matches!(
        AppConfig::from_toml_str(r#"difficulty = "expert""#),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        AppConfig::load(Path::new("/nonexistent/checkers.toml")),
        Err(ConfigError::Io { .. })
    ));
}
