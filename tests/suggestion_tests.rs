use chrono::NaiveDate;
use mockito::Matcher;
use moodtrack::ai::{OllamaClient, SuggestionProvider};
use moodtrack::errors::{AIError, AppError};
use moodtrack::mood_core::{EntryDraft, Mood};
use moodtrack::ops::log_mood;
use moodtrack::sentiment::SentimentClassifier;
use moodtrack::store::{EntryStore, Overwrite};
use serde_json::json;
use tempfile::tempdir;

fn chat_reply(content: &str) -> String {
    json!({
        "model": "llama3.2:3b",
        "message": { "role": "assistant", "content": content },
        "done": true
    })
    .to_string()
}

#[test]
fn test_suggest_sends_mood_and_activities() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/chat")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({ "model": "llama3.2:3b", "stream": false })),
            Matcher::Regex("I am feeling tired today".to_string()),
            Matcher::Regex("coding, cooking".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_reply("  Take a short walk between coding sessions.\n"))
        .create();

    let client = OllamaClient::new(server.url(), "llama3.2:3b");
    let suggestion = client.suggest(Mood::Tired, "coding, cooking").unwrap();

    assert_eq!(suggestion, "Take a short walk between coding sessions.");
    mock.assert();
}

#[test]
fn test_suggest_missing_model() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/chat")
        .with_status(404)
        .with_body("model not found")
        .create();

    let client = OllamaClient::new(server.url(), "missing-model");
    match client.suggest(Mood::Happy, "jogging") {
        Err(AppError::AI(AIError::ModelNotFound(model))) => assert_eq!(model, "missing-model"),
        other => panic!("Expected ModelNotFound, got {:?}", other),
    }
}

#[test]
fn test_suggest_rejects_empty_reply() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_reply("   "))
        .create();

    let client = OllamaClient::new(server.url(), "llama3.2:3b");
    assert!(matches!(
        client.suggest(Mood::Happy, "jogging"),
        Err(AppError::AI(AIError::InvalidResponse(_)))
    ));
}

#[test]
fn test_log_mood_with_server_error_still_saves() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/chat")
        .with_status(500)
        .with_body("internal error")
        .create();

    let dir = tempdir().unwrap();
    let store = EntryStore::new(dir.path().join("mood_data.csv"), SentimentClassifier::default());
    let client = OllamaClient::new(server.url(), "llama3.2:3b");
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

    let report = log_mood(
        &store,
        Some(&client),
        &EntryDraft::new("anxious", "studying", ""),
        date,
        &mut Overwrite::Never,
    )
    .unwrap();

    assert!(report.saved());
    assert!(matches!(report.suggestion, Some(Err(ref msg)) if msg.contains("500")));
    assert_eq!(store.load_all().len(), 1);
}
