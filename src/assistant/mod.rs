//! The language-model assistant.
//!
//! A submission captures the document, runs the completion off the event
//! loop, and the reply is merged back into whatever the store holds when it
//! arrives.

pub mod client;
pub mod credential;
pub mod extract;
pub mod merge;
pub mod panel;
pub mod prompt;

pub use client::{CompletionClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use credential::{ApiKey, CredentialSource, SessionCredential};
pub use extract::extract_json_candidate;
pub use merge::{merge_reply, MergeOutcome, MERGE_FAILURE_MESSAGE};
pub use panel::{AssistantPanel, SubmitRejection, Submission};
pub use prompt::{QuickPrompt, QUICK_PROMPTS, SYSTEM_PROMPT};
