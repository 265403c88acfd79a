use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::tempdir;

use moodtrack::config::Config;
use moodtrack::errors::AppError;
use moodtrack::store::EntryStore;

const VARS: [&str; 6] = [
    "MOODTRACK_DIR",
    "MOODTRACK_OLLAMA_URL",
    "MOODTRACK_CHAT_MODEL",
    "MOODTRACK_SAMPLE_ENTRIES",
    "MOODTRACK_AUTO_SEED",
    "HOME",
];

fn save_env() -> Vec<(&'static str, Option<String>)> {
    VARS.iter().map(|k| (*k, env::var(k).ok())).collect()
}

fn restore_env(saved: Vec<(&'static str, Option<String>)>) {
    for (key, value) in saved {
        match value {
            Some(val) => env::set_var(key, val),
            None => env::remove_var(key),
        }
    }
}

#[test]
#[serial]
fn test_config_load_with_environment_vars() {
    let saved = save_env();

    let temp_dir = tempdir().unwrap();
    let dir_path = temp_dir.path().to_string_lossy().to_string();
    env::set_var("MOODTRACK_DIR", &dir_path);
    env::set_var("MOODTRACK_CHAT_MODEL", "test-model");
    env::remove_var("MOODTRACK_SAMPLE_ENTRIES");
    env::remove_var("MOODTRACK_AUTO_SEED");

    let config = Config::load().unwrap();
    assert_eq!(config.data_dir, PathBuf::from(&dir_path));
    assert_eq!(config.chat_model, "test-model");
    assert!(config.validate().is_ok());

    let store = EntryStore::from_config(&config);
    assert_eq!(store.path(), temp_dir.path().join("mood_data.csv"));

    restore_env(saved);
}

#[test]
#[serial]
fn test_config_expands_tilde() {
    let saved = save_env();

    let home = tempdir().unwrap();
    env::set_var("HOME", home.path());
    env::set_var("MOODTRACK_DIR", "~/moods");
    env::remove_var("MOODTRACK_SAMPLE_ENTRIES");
    env::remove_var("MOODTRACK_AUTO_SEED");

    let config = Config::load().unwrap();
    assert_eq!(config.data_dir, home.path().join("moods"));

    restore_env(saved);
}

#[test]
#[serial]
fn test_config_rejects_bad_auto_seed() {
    let saved = save_env();

    env::set_var("MOODTRACK_DIR", "/tmp/moodtrack-test");
    env::remove_var("MOODTRACK_SAMPLE_ENTRIES");
    env::set_var("MOODTRACK_AUTO_SEED", "sometimes");

    match Config::load() {
        Err(AppError::Config(msg)) => assert!(msg.contains("MOODTRACK_AUTO_SEED")),
        other => panic!("Expected config error, got {:?}", other),
    }

    restore_env(saved);
}

#[test]
#[serial]
fn test_config_validate_rejects_relative_dir() {
    let saved = save_env();

    env::set_var("MOODTRACK_DIR", "relative/moods");
    env::remove_var("MOODTRACK_SAMPLE_ENTRIES");
    env::remove_var("MOODTRACK_AUTO_SEED");

    let config = Config::load().unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("absolute"));

    restore_env(saved);
}
