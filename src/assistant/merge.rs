//! Apply a model reply to the store.

use super::extract::extract_json_candidate;
use crate::error::DocumentError;
use crate::spec::{SpecFormat, SpecStore};

/// Shown when a reply carried a candidate that the store refused.
pub const MERGE_FAILURE_MESSAGE: &str =
    "Failed to apply the suggested changes. The response contained invalid OpenAPI specification.";

/// Result of offering a reply to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The reply had no `{...}` span; nothing was attempted.
    NoCandidate,
    /// The candidate replaced the document.
    Applied,
    /// The candidate was not valid JSON or not a minimal OpenAPI shape.
    Rejected(DocumentError),
}

impl MergeOutcome {
    /// Message for the assistant panel, if the outcome warrants one.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            MergeOutcome::Rejected(_) => Some(MERGE_FAILURE_MESSAGE),
            _ => None,
        }
    }
}

/// Extract the candidate from `reply` and try to make it the document.
///
/// The candidate is always parsed as JSON, whatever the active text format.
/// Whatever the store holds now is replaced; there is no check against the
/// document the question was asked about.
pub fn merge_reply(store: &mut SpecStore, reply: &str) -> MergeOutcome {
    let Some(candidate) = extract_json_candidate(reply) else {
        tracing::debug!("reply carried no JSON candidate");
        return MergeOutcome::NoCandidate;
    };
    let result = SpecFormat::Json
        .parse(candidate)
        .and_then(|document| store.try_replace_from_object(document));
    match result {
        Ok(()) => {
            tracing::info!(revision = store.revision(), "applied assistant suggestion");
            MergeOutcome::Applied
        }
        Err(err) => {
            tracing::warn!(code = err.error_code(), error = %err, "rejected assistant suggestion");
            MergeOutcome::Rejected(err)
        }
    }
}
