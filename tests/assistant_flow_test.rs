//! End-to-end assistant flows driven through key events.

mod common;

use common::*;
use crossterm::event::KeyCode;
use specdeck::app::Focus;
use specdeck::assistant::MERGE_FAILURE_MESSAGE;
use specdeck::error::{CREDENTIAL_MESSAGE, GENERIC_MESSAGE, MISSING_CREDENTIAL_MESSAGE};

const NEW_SPEC: &str = r#"Here is the updated spec:
```json
{"openapi": "3.0.0", "info": {"title": "Pet Store", "version": "2.0.0"}, "paths": {}}
```"#;

#[tokio::test]
async fn test_prompt_reply_replaces_document_and_editor() {
    let http = MockHttpConfig::new().with_completion(NEW_SPEC).build();
    let mut app = app_with(&http);

    app.handle_key(key(KeyCode::F(4)));
    assert_eq!(app.focus, Focus::Assistant);
    type_text(&mut app, "rename the api");
    app.handle_key(key(KeyCode::Enter));
    assert!(app.assistant.is_busy());

    pump_messages(&mut app).await;
    app.refresh_code_from_store();

    assert!(!app.assistant.is_busy());
    assert_eq!(app.store.document()["info"]["title"], "Pet Store");
    assert!(app.code_editor.content().contains("Pet Store"));
    assert!(app.prompt_input.is_empty());

    let requests = http.get_requests();
    assert_eq!(requests.len(), 1);
    let body = requests[0].json_body().unwrap();
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["messages"][0]["role"], "system");
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("rename the api"));
    assert!(user.contains("\"title\": \"My API\""));
}

#[tokio::test]
async fn test_edit_while_pending_is_overwritten_by_reply() {
    let http = MockHttpConfig::new().with_completion(NEW_SPEC).build();
    let mut app = app_with(&http);

    app.handle_key(key(KeyCode::F(4)));
    type_text(&mut app, "rename the api");
    app.handle_key(key(KeyCode::Enter));
    assert!(app.assistant.is_busy());

    assert!(app.store.replace_from_object(minimal_doc("Local")));
    app.refresh_code_from_store();
    assert_eq!(app.store.revision(), 1);
    assert!(app.code_editor.content().contains("Local"));

    pump_messages(&mut app).await;
    app.refresh_code_from_store();

    let requests = http.get_requests();
    assert_eq!(requests.len(), 1);
    let body = requests[0].json_body().unwrap();
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("\"title\": \"My API\""));
    assert!(!user.contains("Local"));

    assert_eq!(app.store.document()["info"]["title"], "Pet Store");
    assert_eq!(app.store.revision(), 2);
    assert!(app.code_editor.content().contains("Pet Store"));
    assert!(!app.code_editor.content().contains("Local"));
}

#[tokio::test]
async fn test_reply_with_two_objects_is_not_applied() {
    let http = MockHttpConfig::new()
        .with_completion(r#"Example: {"foo": 1} and then {"bar": 2}"#)
        .build();
    let mut app = app_with(&http);

    app.handle_key(key(KeyCode::F(4)));
    type_text(&mut app, "q");
    app.handle_key(key(KeyCode::Enter));
    pump_messages(&mut app).await;

    assert_eq!(app.store.revision(), 0);
    assert_eq!(app.assistant.error(), Some(MERGE_FAILURE_MESSAGE));
    assert!(app.assistant.reply().unwrap().contains("{\"foo\": 1}"));
}

#[tokio::test]
async fn test_prose_reply_is_shown_without_change() {
    let http = MockHttpConfig::new()
        .with_completion("Consider adding a 404 response to /hello.")
        .build();
    let mut app = app_with(&http);

    app.handle_key(key(KeyCode::F(4)));
    type_text(&mut app, "review");
    app.handle_key(key(KeyCode::Enter));
    pump_messages(&mut app).await;

    assert_eq!(app.store.revision(), 0);
    assert_eq!(app.assistant.error(), None);
    assert_eq!(
        app.assistant.reply(),
        Some("Consider adding a 404 response to /hello.")
    );
}

#[tokio::test]
async fn test_unauthorized_reopens_credential_entry() {
    let http = MockHttpConfig::new()
        .with_status(401, r#"{"error": {"message": "Incorrect API key provided"}}"#)
        .build();
    let mut app = app_with(&http);

    app.handle_key(key(KeyCode::F(4)));
    type_text(&mut app, "q");
    app.handle_key(key(KeyCode::Enter));
    pump_messages(&mut app).await;

    assert_eq!(app.assistant.error(), Some(CREDENTIAL_MESSAGE));
    assert!(app.assistant.credential_entry_open());
}

#[tokio::test]
async fn test_server_error_is_generic() {
    let http = MockHttpConfig::new().with_status(500, "boom").build();
    let mut app = app_with(&http);

    app.handle_key(key(KeyCode::F(4)));
    type_text(&mut app, "q");
    app.handle_key(key(KeyCode::Enter));
    pump_messages(&mut app).await;

    assert_eq!(app.assistant.error(), Some(GENERIC_MESSAGE));
    assert!(!app.assistant.credential_entry_open());
}

#[tokio::test]
async fn test_missing_key_then_typed_key() {
    let http = MockHttpConfig::new().with_completion(NEW_SPEC).build();
    let mut app = app_without_key(&http);
    assert!(app.assistant.credential_entry_open());

    // Esc closes the entry; submitting without a key reopens it
    app.handle_key(key(KeyCode::F(4)));
    app.handle_key(key(KeyCode::Esc));
    assert!(!app.assistant.credential_entry_open());
    type_text(&mut app, "rename");
    app.handle_key(key(KeyCode::Enter));
    assert!(app.assistant.credential_entry_open());
    assert_eq!(app.assistant.error(), Some(MISSING_CREDENTIAL_MESSAGE));
    assert!(http.get_requests().is_empty());

    type_text(&mut app, "sk-typed");
    app.handle_key(key(KeyCode::Enter));
    assert!(!app.assistant.credential_entry_open());
    assert!(app.credential_input.is_empty());

    app.handle_key(key(KeyCode::Enter));
    pump_messages(&mut app).await;

    let requests = http.get_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].headers.get("Authorization").map(String::as_str),
        Some("Bearer sk-typed")
    );
    assert_eq!(app.store.document()["info"]["title"], "Pet Store");
}

#[tokio::test]
async fn test_quick_prompt_submits_canned_text() {
    let http = MockHttpConfig::new().with_completion("ok").build();
    let mut app = app_with(&http);

    app.handle_key(key(KeyCode::F(4)));
    app.handle_key(ctrl('p'));
    assert!(app.assistant.quick_prompts_open());
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));
    pump_messages(&mut app).await;

    let body = http.get_requests()[0].json_body().unwrap();
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("error responses"), "unexpected prompt: {}", user);
    assert!(!app.assistant.quick_prompts_open());
}

#[tokio::test]
async fn test_second_submit_while_busy_is_ignored() {
    let http = MockHttpConfig::new().with_completion("ok").build();
    let mut app = app_with(&http);

    app.handle_key(key(KeyCode::F(4)));
    type_text(&mut app, "first");
    app.handle_key(key(KeyCode::Enter));
    type_text(&mut app, "second");
    app.handle_key(key(KeyCode::Enter));

    pump_messages(&mut app).await;
    assert_eq!(http.get_requests().len(), 1);
}
