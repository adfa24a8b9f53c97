//! User actions that change the document or talk to the outside world.

use serde_json::Value;

use super::{App, AppMessage, FieldTarget};
use crate::assistant::{MergeOutcome, SubmitRejection};
use crate::preview::Viewer;
use crate::spec::edit;

impl App {
    // =========================================================================
    // Visual editor
    // =========================================================================

    /// Open the selected field for in-place editing.
    pub fn begin_field_edit(&mut self) {
        let Some(target) = self.visual.selected_target(self.store.document()) else {
            return;
        };
        self.field_input.set_content(&target.value_in(self.store.document()));
        self.field_input.move_cursor_bottom();
        self.visual.editing = Some(target);
    }

    /// Commit the field buffer through the store.
    pub fn save_field_edit(&mut self) {
        let Some(target) = self.visual.editing.take() else {
            return;
        };
        let updated = target.applied_to(self.store.document(), &self.field_input.content());
        self.field_input.clear();
        self.commit_document(updated);
    }

    pub fn cancel_field_edit(&mut self) {
        self.visual.editing = None;
        self.field_input.clear();
    }

    /// Append a placeholder server and select its URL.
    pub fn add_server(&mut self) {
        let updated = edit::with_server_added(self.store.document());
        if self.commit_document(updated) {
            let index = edit::server_count(self.store.document()).saturating_sub(1);
            let targets = FieldTarget::all_for(self.store.document());
            if let Some(position) = targets
                .iter()
                .position(|t| t.server_index() == Some(index))
            {
                self.visual.selected = position;
            }
        }
    }

    /// Remove the server owning the selected field.
    pub fn remove_selected_server(&mut self) {
        let Some(index) = self
            .visual
            .selected_target(self.store.document())
            .and_then(|t| t.server_index())
        else {
            self.status = Some("Select a server field to remove it".to_string());
            return;
        };
        let updated = edit::with_server_removed(self.store.document(), index);
        self.commit_document(updated);
    }

    /// Replace the document from a structured edit and bring the other
    /// surfaces up to date.
    fn commit_document(&mut self, document: Value) -> bool {
        match self.store.try_replace_from_object(document) {
            Ok(()) => {
                self.refresh_code_from_store();
                self.visual.clamp(self.store.document());
                true
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "structured edit rejected");
                self.status = Some(err.user_message());
                false
            }
        }
    }

    // =========================================================================
    // Assistant
    // =========================================================================

    /// Send the prompt buffer to the assistant.
    pub fn submit_prompt(&mut self) {
        let question = self.prompt_input.content();
        self.submit_question(&question);
    }

    /// Send the highlighted quick prompt.
    pub fn submit_quick_prompt(&mut self) {
        let prompt = self.assistant.selected_quick_prompt();
        self.submit_question(prompt.prompt);
    }

    /// Start a completion for `question` against the current document.
    ///
    /// The request runs on a spawned task; its result comes back as an
    /// [`AppMessage::AssistantReply`].
    pub fn submit_question(&mut self, question: &str) {
        let submission = match self.assistant.begin(question, self.store.document()) {
            Ok(submission) => submission,
            Err(SubmitRejection::MissingCredential) => {
                self.credential_input.clear();
                return;
            }
            Err(rejection) => {
                tracing::debug!(?rejection, "assistant submission not started");
                return;
            }
        };

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client
                .complete(&submission.key, &submission.document, &submission.question)
                .await;
            let _ = tx.send(AppMessage::AssistantReply {
                request_id: submission.request_id,
                result,
            });
        });
    }

    pub fn confirm_credential(&mut self) {
        let raw = self.credential_input.content();
        self.assistant.submit_credential(&raw);
        self.credential_input.clear();
    }

    pub fn cancel_credential(&mut self) {
        self.assistant.close_credential_entry();
        self.credential_input.clear();
    }

    pub fn open_credential_entry(&mut self) {
        self.credential_input.clear();
        self.assistant.open_credential_entry();
    }

    /// Fold a finished completion into the panel and the store.
    pub(super) fn finish_assistant_request(
        &mut self,
        request_id: uuid::Uuid,
        result: Result<String, crate::error::AssistantError>,
    ) {
        let outcome = self
            .assistant
            .finish(request_id, result, &mut self.store);
        self.prompt_input.clear();
        if self.assistant.credential_entry_open() {
            self.credential_input.clear();
        }
        if outcome == Some(MergeOutcome::Applied) {
            self.refresh_code_from_store();
            self.status = Some("Applied the assistant's changes".to_string());
        }
    }

    // =========================================================================
    // Preview
    // =========================================================================

    pub fn select_viewer(&mut self, viewer: Viewer) {
        self.store.set_viewer(viewer);
    }

    /// Open the preview page in the system browser.
    pub fn open_preview(&mut self) {
        let Some(url) = self.preview_url.clone() else {
            self.status = Some("Preview server is not running".to_string());
            return;
        };
        let tx = self.message_tx.clone();
        self.status = Some(format!("Opening {}", url));
        tokio::task::spawn_blocking(move || {
            if let Err(e) = open::that(&url) {
                tracing::warn!(%url, error = %e, "failed to open browser");
                let _ = tx.send(AppMessage::BrowserOpenFailed(e.to_string()));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::adapters::mock::MockResponse;
    use crate::app::test_support::app_with_mock;
    use crate::app::{AppMessage, FieldTarget};
    use crate::preview::Viewer;
    use crate::spec::edit::{InfoField, ServerField};
    use crate::traits::Response;
    use serde_json::json;

    #[test]
    fn test_field_edit_commits_through_store() {
        let (mut app, _) = app_with_mock();
        app.visual.selected = 0;
        app.begin_field_edit();
        assert_eq!(app.visual.editing, Some(FieldTarget::Info(InfoField::Title)));
        assert_eq!(app.field_input.content(), "My API");

        app.field_input.set_content("Renamed");
        app.save_field_edit();

        assert_eq!(app.store.document()["info"]["title"], "Renamed");
        assert!(app.visual.editing.is_none());
        assert!(app.code_editor.content().contains("title: Renamed"));
    }

    #[test]
    fn test_cancel_field_edit_leaves_document() {
        let (mut app, _) = app_with_mock();
        let revision = app.store.revision();
        app.begin_field_edit();
        app.field_input.set_content("Nope");
        app.cancel_field_edit();
        assert_eq!(app.store.revision(), revision);
        assert_eq!(app.store.document()["info"]["title"], "My API");
    }

    #[test]
    fn test_add_and_remove_server() {
        let (mut app, _) = app_with_mock();
        app.add_server();
        assert_eq!(
            app.store.document()["servers"],
            json!([{"url": "https://", "description": "New server"}])
        );
        assert_eq!(
            app.visual.selected_target(app.store.document()),
            Some(FieldTarget::Server {
                index: 0,
                field: ServerField::Url
            })
        );

        app.remove_selected_server();
        assert_eq!(app.store.document()["servers"], json!([]));
        assert_eq!(app.visual.selected, 2);
    }

    #[test]
    fn test_remove_needs_server_selection() {
        let (mut app, _) = app_with_mock();
        let revision = app.store.revision();
        app.remove_selected_server();
        assert_eq!(app.store.revision(), revision);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_viewer_switch_keeps_document() {
        let (mut app, _) = app_with_mock();
        let revision = app.store.revision();
        app.select_viewer(Viewer::RapiDoc);
        assert_eq!(app.store.viewer(), Viewer::RapiDoc);
        assert_eq!(app.store.revision(), revision);
    }

    #[test]
    fn test_open_preview_without_server() {
        let (mut app, _) = app_with_mock();
        app.open_preview();
        assert_eq!(app.status.as_deref(), Some("Preview server is not running"));
    }

    #[tokio::test]
    async fn test_submit_round_trip_applies_reply() {
        let (mut app, http) = app_with_mock();
        let reply = r#"Sure: {"openapi":"3.0.0","info":{"title":"From AI","version":"2"},"paths":{}}"#;
        let body = json!({"choices": [{"message": {"role": "assistant", "content": reply}}]});
        http.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(body.to_string()),
        )));

        app.prompt_input.set_content("rename it");
        app.submit_prompt();
        assert!(app.assistant.is_busy());

        let mut rx = app.message_rx.take().unwrap();
        let msg = rx.recv().await.unwrap();
        assert!(matches!(msg, AppMessage::AssistantReply { .. }));
        app.handle_message(msg);

        assert!(!app.assistant.is_busy());
        assert!(app.prompt_input.is_empty());
        assert_eq!(app.store.document()["info"]["title"], "From AI");
        assert!(app.code_editor.content().contains("From AI"));
        assert_eq!(http.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_prompt_is_not_sent() {
        let (mut app, http) = app_with_mock();
        app.prompt_input.set_content("   ");
        app.submit_prompt();
        assert!(!app.assistant.is_busy());
        assert!(http.get_requests().is_empty());
    }
}
