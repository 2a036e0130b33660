use super::*;

// =============================================================
// Requests
// =============================================================

#[test]
fn credentials_serialize_as_email_and_password() {
    let body = serde_json::to_value(Credentials { email: "a@b.com", password: "pw" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn chat_request_sends_integer_project_id() {
    let body = serde_json::to_value(ChatRequest { project_id: 7, message: "hi" }).unwrap();
    assert_eq!(body, serde_json::json!({ "project_id": 7, "message": "hi" }));
}

#[test]
fn prompt_draft_serializes_name_and_content() {
    let body = serde_json::to_value(PromptDraft { name: "tone", content: "be brief" }).unwrap();
    assert_eq!(body, serde_json::json!({ "name": "tone", "content": "be brief" }));
}

// =============================================================
// Responses
// =============================================================

#[test]
fn login_response_with_token() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"access_token":"X","token_type":"bearer"}"#).unwrap();
    assert_eq!(body.access_token.as_deref(), Some("X"));
    assert_eq!(body.token_type.as_deref(), Some("bearer"));
}

#[test]
fn login_response_without_token_keeps_detail() {
    let body: LoginResponse = serde_json::from_str(r#"{"detail":"Invalid credentials"}"#).unwrap();
    assert!(body.access_token.is_none());
    assert_eq!(body.detail_text().as_deref(), Some("Invalid credentials"));
}

#[test]
fn login_response_list_detail_still_decodes() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#).unwrap();
    assert!(body.access_token.is_none());
    assert_eq!(body.detail_text(), None);
}

#[test]
fn chat_reply_list_detail_still_decodes() {
    let body: ChatReply = serde_json::from_str(r#"{"detail":[{"msg":"value is not a valid integer"}]}"#).unwrap();
    assert_eq!(body.detail_text(), None);
}

#[test]
fn prompt_accepts_echoed_project_id() {
    let prompt: Prompt =
        serde_json::from_str(r#"{"id":3,"project_id":1,"name":"n","content":"c"}"#).unwrap();
    assert_eq!(prompt.project_id, Some(1));
    let bare: Prompt = serde_json::from_str(r#"{"id":3,"name":"n","content":"c"}"#).unwrap();
    assert_eq!(bare.project_id, None);
}

#[test]
fn file_record_ignores_missing_optional_fields() {
    let file: FileRecord = serde_json::from_str(r#"{"id":9,"filename":"a.pdf","file_size":2048}"#).unwrap();
    assert_eq!(file.file_size, 2048);
    assert!(file.openai_file_id.is_none());
}

#[test]
fn error_body_string_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"Project not found"}"#).unwrap();
    assert_eq!(body.detail_text().as_deref(), Some("Project not found"));
}

#[test]
fn error_body_list_detail_is_treated_as_absent() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":[{"loc":["body","name"]}]}"#).unwrap();
    assert_eq!(body.detail_text(), None);
}

#[test]
fn error_body_empty_detail_is_treated_as_absent() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":""}"#).unwrap();
    assert_eq!(body.detail_text(), None);
}
