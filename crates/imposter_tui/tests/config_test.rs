//! Config loading tests.

use imposter_core::{DEFAULT_SUGGESTIONS, GameController, Phase, WordSuggestions};
use imposter_tui::GameConfig;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(config.word_suggestions(), &DEFAULT_SUGGESTIONS.map(String::from).to_vec());
    assert_eq!(config.seed(), &None);
    assert_eq!(config.log_file(), &PathBuf::from("imposter_word.log"));
}

#[test]
fn test_parses_all_fields() {
    let file = write_config(
        r#"
word_suggestions = ["Volcano", "Museum"]
seed = 42
log_file = "game.log"
"#,
    );
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.word_suggestions(), &vec!["Volcano".to_string(), "Museum".to_string()]);
    assert_eq!(config.seed(), &Some(42));
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("seed = 7\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.seed(), &Some(7));
    assert_eq!(config.log_file(), &PathBuf::from("imposter_word.log"));
    assert_eq!(config.suggestions().words().len(), DEFAULT_SUGGESTIONS.len());
}

#[test]
fn test_blank_suggestions_fall_back() {
    let file = write_config(r#"word_suggestions = ["", "   "]"#);
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.suggestions(), WordSuggestions::default());
}

#[test]
fn test_invalid_toml_is_error() {
    let file = write_config("seed = [not toml");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_overrides_win() {
    let file = write_config("seed = 1\n");
    let config = GameConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(9), Some(PathBuf::from("other.log")));
    assert_eq!(config.seed(), &Some(9));
    assert_eq!(config.log_file(), &PathBuf::from("other.log"));

    let kept = config.clone().with_overrides(None, None);
    assert_eq!(kept, config);
}

#[test]
fn test_seeded_dice_repeat_the_draw() {
    let config = GameConfig::default().with_overrides(Some(1234), None);
    let suggestions = config.suggestions();
    let mut a = GameController::with_dice(config.dice());
    let mut b = GameController::with_dice(config.dice());
    assert_eq!(a.suggest_word(&suggestions), b.suggest_word(&suggestions));

    for game in [&mut a, &mut b] {
        game.start_game("12", "Museum").unwrap();
        while game.phase() != Phase::PendingFinish {
            game.reveal_word().unwrap();
            game.advance().unwrap();
        }
        game.reveal_results().unwrap();
    }
    assert_eq!(
        a.results().unwrap().imposter(),
        b.results().unwrap().imposter()
    );
}
