//! AppMessage enum for async communication within the application.

use uuid::Uuid;

use crate::error::AssistantError;

/// Messages delivered to the event loop from spawned tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A completion request finished
    AssistantReply {
        request_id: Uuid,
        result: Result<String, AssistantError>,
    },
    /// Opening the preview in the system browser failed
    BrowserOpenFailed(String),
}
