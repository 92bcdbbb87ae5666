//! History file persistence.

mod common;

use std::fs;

use numquiz_core::GameType;
use numquiz_terminal::history::{HistoryStore, Statistics, MAX_SESSIONS};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use common::fixtures;

fn store(dir: &TempDir) -> HistoryStore {
    HistoryStore::new(dir.path().join("history.json"))
}

#[test]
fn test_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    assert!(store.load().is_empty());
    assert_eq!(store.statistics().total_games, 0);
    assert_eq!(store.statistics().accuracy, 0.0);
}

#[test]
fn test_append_keeps_newest_first() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    let first = fixtures::summary(GameType::Addition, 5, 10);
    let second = fixtures::summary(GameType::Fractions, 8, 10);
    store.append(first.clone()).unwrap();
    store.append(second.clone()).unwrap();

    let sessions = store.load();
    assert_eq!(sessions, vec![second, first]);
}

#[test]
fn test_append_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path().join("nested").join("numquiz").join("history.json"));

    store.append(fixtures::summary(GameType::Addition, 1, 1)).unwrap();
    assert!(store.path().exists());
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_history_is_capped() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    for _ in 0..MAX_SESSIONS {
        store.append(fixtures::summary(GameType::Addition, 1, 10)).unwrap();
    }
    let newest = fixtures::summary(GameType::Division, 9, 10);
    store.append(newest.clone()).unwrap();

    let sessions = store.load();
    assert_eq!(sessions.len(), MAX_SESSIONS);
    assert_eq!(sessions[0], newest);
}

#[test]
fn test_corrupt_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    fs::write(store.path(), "{ not a history").unwrap();

    assert!(store.load().is_empty());

    store.append(fixtures::summary(GameType::Addition, 3, 5)).unwrap();
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_by_game_type() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.append(fixtures::summary(GameType::Addition, 1, 5)).unwrap();
    store.append(fixtures::summary(GameType::ReadingNumbers, 2, 5)).unwrap();
    store.append(fixtures::summary(GameType::Addition, 3, 5)).unwrap();

    let additions = store.by_game_type(GameType::Addition);
    assert_eq!(additions.len(), 2);
    assert_eq!(additions[0].correct_answers, 3);
    assert_eq!(additions[1].correct_answers, 1);
    assert!(store.by_game_type(GameType::Fractions).is_empty());
}

#[test]
fn test_statistics() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.append(fixtures::summary(GameType::Addition, 6, 10)).unwrap();
    store.append(fixtures::summary(GameType::Subtraction, 9, 10)).unwrap();

    assert_eq!(
        store.statistics(),
        Statistics {
            total_games: 2,
            total_questions: 20,
            correct_answers: 15,
            accuracy: 75.0,
            average_score: 75.0,
        }
    );
}

#[test]
fn test_clear() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.append(fixtures::summary(GameType::Addition, 1, 1)).unwrap();

    store.clear().unwrap();
    assert!(store.load().is_empty());
    store.clear().unwrap();
}

#[test]
fn test_played_game_is_saved() {
    let dir = TempDir::new().unwrap();
    let config = common::config(
        GameType::ComparingNumbers,
        fixtures::settings(3, numquiz_core::QuestionMode::Written),
        &dir.path().join("history.json"),
    );
    let answers = common::questions(&config).iter().map(fixtures::correct_input).collect::<Vec<_>>();
    let (summary, _) = common::play(&config, &common::script(answers)).unwrap();

    let store = HistoryStore::new(&config.history_path);
    store.append(summary.unwrap()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(json[0]["gameType"], "comparingNumbers");
    assert_eq!(json[0]["correctAnswers"], 3);
    assert_eq!(json[0]["totalScore"], 30);
}
