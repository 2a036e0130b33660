use futures::executor::block_on;

use super::*;
use crate::error::ApiError;
use crate::testing::mock_client;

fn session() -> Session {
    Session::with_token("tok")
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_message_is_rejected_first() {
    assert_eq!(validate_chat_input("", ""), Err(ENTER_MESSAGE));
}

#[test]
fn missing_project_is_rejected() {
    assert_eq!(validate_chat_input("hi", ""), Err(SELECT_PROJECT));
}

#[test]
fn valid_input_yields_project_id() {
    assert_eq!(validate_chat_input("hi", "4"), Ok(4));
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn reply_is_shown_and_draft_cleared() {
    let api = mock_client();
    api.transport().push_json(200, serde_json::json!({ "reply": "hello" }));
    let mut state = ChatState { draft: "hi".to_owned(), ..ChatState::default() };

    let project_id = validate_chat_input(&state.draft, "1").unwrap();
    let ticket = state.begin();
    assert_eq!(state.response, THINKING);
    let outcome = block_on(send_message(&api, &session(), project_id, "hi", 100));

    assert!(state.finish(ticket, outcome));
    assert_eq!(state.response, "hello");
    assert!(state.draft.is_empty());
    assert!(state.error.is_empty());
    assert_eq!(api.transport().json_body(0), serde_json::json!({ "project_id": 1, "message": "hi" }));
}

#[test]
fn non_json_error_body_is_truncated_to_preview() {
    let api = mock_client();
    let body = format!("Internal Server Error{}", "!".repeat(200));
    api.transport().push_text(500, "text/plain; charset=utf-8", &body);

    let outcome = block_on(send_message(&api, &session(), 1, "hi", 100));

    let ChatOutcome::Failed(message) = outcome else {
        panic!("expected failure");
    };
    assert_eq!(message, format!("Server error: {}", &body[..100]));
}

#[test]
fn json_error_surfaces_detail() {
    let resp = ApiResponse {
        status: 404,
        content_type: Some("application/json".to_owned()),
        body: r#"{"detail":"Project not found"}"#.to_owned(),
    };
    assert_eq!(classify_chat_response(&resp, 100), ChatOutcome::Failed("Project not found".to_owned()));
}

#[test]
fn json_error_without_detail_uses_fallback() {
    let resp = ApiResponse { status: 500, content_type: Some("application/json".to_owned()), body: "{}".to_owned() };
    assert_eq!(classify_chat_response(&resp, 100), ChatOutcome::Failed(RESPONSE_FAILED.to_owned()));
}

#[test]
fn validation_error_list_uses_fallback() {
    let resp = ApiResponse {
        status: 422,
        content_type: Some("application/json".to_owned()),
        body: r#"{"detail":[{"loc":["body","project_id"],"msg":"value is not a valid integer"}]}"#.to_owned(),
    };
    assert_eq!(classify_chat_response(&resp, 100), ChatOutcome::Failed(RESPONSE_FAILED.to_owned()));
}

#[test]
fn ok_without_reply_shows_placeholder() {
    let resp = ApiResponse { status: 200, content_type: Some("application/json".to_owned()), body: "{}".to_owned() };
    assert_eq!(classify_chat_response(&resp, 100), ChatOutcome::Reply(NO_RESPONSE.to_owned()));
}

#[test]
fn missing_content_type_is_treated_as_non_json() {
    let resp = ApiResponse { status: 200, content_type: None, body: "hello".to_owned() };
    assert_eq!(classify_chat_response(&resp, 100), ChatOutcome::Failed("Server error: hello".to_owned()));
}

#[test]
fn transport_failure_is_prefixed() {
    let api = mock_client();
    api.transport().push(Err(ApiError::Network("Failed to fetch".to_owned())));
    let outcome = block_on(send_message(&api, &session(), 1, "hi", 100));
    assert_eq!(outcome, ChatOutcome::Failed("Error: Failed to fetch".to_owned()));
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn failure_clears_reply_and_keeps_draft() {
    let mut state = ChatState { draft: "hi".to_owned(), ..ChatState::default() };
    let ticket = state.begin();
    assert!(state.in_flight());
    state.finish(ticket, ChatOutcome::Failed("boom".to_owned()));
    assert_eq!(state.error, "boom");
    assert!(state.response.is_empty());
    assert_eq!(state.draft, "hi");
}

#[test]
fn superseded_result_is_dropped() {
    let mut state = ChatState::default();
    let first = state.begin();
    let second = state.begin();

    assert!(state.finish(second, ChatOutcome::Reply("newer".to_owned())));
    assert!(!state.finish(first, ChatOutcome::Reply("older".to_owned())));
    assert_eq!(state.response, "newer");
}

#[test]
fn reject_sets_error_only() {
    let mut state = ChatState { response: "previous".to_owned(), ..ChatState::default() };
    state.reject(ENTER_MESSAGE);
    assert_eq!(state.error, ENTER_MESSAGE);
    assert_eq!(state.response, "previous");
}
