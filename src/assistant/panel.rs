//! State behind the assistant pane.
//!
//! The pane owns the request lifecycle: it decides whether a submission may
//! start, hands the caller a [`Submission`] to run off the event loop, and
//! folds the result back in when it arrives.

use serde_json::Value;
use uuid::Uuid;

use super::credential::{ApiKey, SessionCredential};
use super::merge::{merge_reply, MergeOutcome};
use super::prompt::{QuickPrompt, QUICK_PROMPTS};
use crate::error::{AssistantError, MISSING_CREDENTIAL_MESSAGE};
use crate::spec::SpecStore;

/// Everything a spawned request needs, captured at submission time.
#[derive(Debug, Clone)]
pub struct Submission {
    pub request_id: Uuid,
    pub key: ApiKey,
    pub document: Value,
    pub question: String,
}

/// Why a submission did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    Busy,
    EmptyPrompt,
    MissingCredential,
}

#[derive(Debug, Default)]
pub struct AssistantPanel {
    credential: SessionCredential,
    pending: Option<Uuid>,
    reply: Option<String>,
    error: Option<&'static str>,
    quick_prompts_open: bool,
    quick_prompt_index: usize,
    credential_entry_open: bool,
}

impl AssistantPanel {
    pub fn new(credential: SessionCredential) -> Self {
        let credential_entry_open = credential.needs_entry_at_startup();
        Self {
            credential,
            credential_entry_open,
            ..Self::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_request(&self) -> Option<Uuid> {
        self.pending
    }

    /// Raw text of the most recent reply.
    pub fn reply(&self) -> Option<&str> {
        self.reply.as_deref()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn credential(&self) -> &SessionCredential {
        &self.credential
    }

    pub fn credential_entry_open(&self) -> bool {
        self.credential_entry_open
    }

    pub fn open_credential_entry(&mut self) {
        self.credential_entry_open = true;
    }

    pub fn close_credential_entry(&mut self) {
        self.credential_entry_open = false;
    }

    /// Store the typed key for this session. The entry closes once a key is
    /// available.
    pub fn submit_credential(&mut self, raw: &str) {
        self.credential.set_session_key(raw);
        if self.credential.is_present() {
            self.credential_entry_open = false;
            if self.error == Some(MISSING_CREDENTIAL_MESSAGE) {
                self.error = None;
            }
        }
    }

    pub fn quick_prompts_open(&self) -> bool {
        self.quick_prompts_open
    }

    pub fn toggle_quick_prompts(&mut self) {
        self.quick_prompts_open = !self.quick_prompts_open;
    }

    pub fn quick_prompt_index(&self) -> usize {
        self.quick_prompt_index
    }

    pub fn select_next_quick_prompt(&mut self) {
        self.quick_prompt_index = (self.quick_prompt_index + 1) % QUICK_PROMPTS.len();
    }

    pub fn select_previous_quick_prompt(&mut self) {
        self.quick_prompt_index =
            (self.quick_prompt_index + QUICK_PROMPTS.len() - 1) % QUICK_PROMPTS.len();
    }

    pub fn selected_quick_prompt(&self) -> QuickPrompt {
        QUICK_PROMPTS[self.quick_prompt_index % QUICK_PROMPTS.len()]
    }

    /// Start a request for `question` about `document`.
    ///
    /// A missing key opens the credential entry; no request is made.
    pub fn begin(&mut self, question: &str, document: &Value) -> Result<Submission, SubmitRejection> {
        if self.is_busy() {
            return Err(SubmitRejection::Busy);
        }
        let Some(key) = self.credential.active().cloned() else {
            self.credential_entry_open = true;
            self.error = Some(MISSING_CREDENTIAL_MESSAGE);
            return Err(SubmitRejection::MissingCredential);
        };
        let question = question.trim();
        if question.is_empty() {
            return Err(SubmitRejection::EmptyPrompt);
        }

        let request_id = Uuid::new_v4();
        self.pending = Some(request_id);
        self.error = None;
        tracing::info!(%request_id, "assistant request started");
        Ok(Submission {
            request_id,
            key,
            document: document.clone(),
            question: question.to_string(),
        })
    }

    /// Fold a finished request into the pane and, on success, into `store`.
    ///
    /// Returns the merge outcome when a reply arrived.
    pub fn finish(
        &mut self,
        request_id: Uuid,
        result: Result<String, AssistantError>,
        store: &mut SpecStore,
    ) -> Option<MergeOutcome> {
        if self.pending == Some(request_id) {
            self.pending = None;
        }
        self.quick_prompts_open = false;

        match result {
            Ok(text) => {
                let outcome = merge_reply(store, &text);
                self.error = outcome.user_message();
                self.reply = Some(text);
                Some(outcome)
            }
            Err(err) => {
                tracing::error!(%request_id, code = err.error_code(), error = %err, "assistant request failed");
                if err.requires_credential() {
                    self.credential_entry_open = true;
                }
                self.error = Some(err.user_message());
                None
            }
        }
    }
}
