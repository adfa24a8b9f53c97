//! Async message handling for the App.

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::AssistantReply { request_id, result } => {
                self.finish_assistant_request(request_id, result);
            }
            AppMessage::BrowserOpenFailed(error) => {
                self.status = Some(format!("Could not open browser: {}", error));
            }
        }
    }
}
