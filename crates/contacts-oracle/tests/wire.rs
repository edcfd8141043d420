//! Request and response mapping for the chat completions oracle.

use contacts_core::{OracleError, OracleRequest, TagClassifier, TagOracle};
use contacts_model::TagRule;
use contacts_oracle::wire::{ChatRequest, interpret_response};
use contacts_oracle::{ChatCompletionsOracle, OracleConfig};

fn classifier() -> TagClassifier {
    TagClassifier::new(vec![
        TagRule::new("logistica internacional", ["logistica"])
            .with_description("Logistics and foreign trade programmes"),
    ])
}

#[test]
fn request_body_matches_the_completions_contract() {
    let classifier = classifier();
    let request = OracleRequest::new("Medicina", "Chile", &classifier);
    let body = ChatRequest::for_classification("test-model", &request);

    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["model"], "test-model");
    assert_eq!(json["max_tokens"], 20);
    assert_eq!(json["temperature"], 0.0);
    assert_eq!(json["stop"], serde_json::json!(["\n", ".", "!", "?"]));
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][1]["role"], "user");
    let system = json["messages"][0]["content"].as_str().unwrap();
    assert!(system.contains("\"logistica internacional\" - Logistics and foreign trade programmes"));
    let user = json["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("Medicina"));
    assert!(user.contains("PAÍS: Chile"));
}

#[test]
fn first_choice_content_is_returned() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":" logistica internacional"}},
                  {"message":{"role":"assistant","content":"other"}}]}"#;
    assert_eq!(interpret_response(200, body).unwrap(), " logistica internacional");
}

#[test]
fn null_content_is_an_empty_reply() {
    let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
    assert_eq!(interpret_response(200, body).unwrap(), "");
}

#[test]
fn auth_failures_map_to_unauthorized() {
    assert!(matches!(
        interpret_response(401, "{}"),
        Err(OracleError::Unauthorized)
    ));
    assert!(matches!(
        interpret_response(403, ""),
        Err(OracleError::Unauthorized)
    ));
}

#[test]
fn api_errors_carry_the_server_message() {
    let body = r#"{"error":{"message":"model not found","type":"invalid_request_error"}}"#;
    match interpret_response(404, body) {
        Err(OracleError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "model not found");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    match interpret_response(502, "Bad Gateway\n") {
        Err(OracleError::Api { message, .. }) => assert_eq!(message, "Bad Gateway"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn malformed_bodies_are_reported() {
    assert!(matches!(
        interpret_response(200, "<html>"),
        Err(OracleError::Malformed(_))
    ));
    assert!(matches!(
        interpret_response(200, r#"{"choices":[]}"#),
        Err(OracleError::Malformed(_))
    ));
}

#[test]
fn unconfigured_oracle_fails_without_network() {
    let oracle = ChatCompletionsOracle::new(OracleConfig::default()).unwrap();
    let classifier = classifier();
    let request = OracleRequest::new("Medicina", "Chile", &classifier);
    match oracle.suggest(&request) {
        Err(OracleError::Unconfigured(message)) => assert!(message.contains("OPENAI_API_KEY")),
        other => panic!("unexpected result: {other:?}"),
    }
}
