//! Keeping the code editor buffer and the store in step.
//!
//! Edits flow buffer -> store on every keystroke; a buffer that does not
//! parse stays on screen with an error while the store keeps the last good
//! document. Store changes from other surfaces flow store -> buffer.

use super::App;

impl App {
    /// Push the code editor buffer into the store after an edit.
    pub fn sync_code_to_store(&mut self) {
        let text = self.code_editor.content();
        match self.store.try_replace_from_text(&text) {
            Ok(()) => {
                self.editor_error = None;
                self.synced_revision = self.store.revision();
                self.visual.clamp(self.store.document());
            }
            Err(err) => {
                tracing::debug!(code = err.error_code(), "code editor buffer rejected");
                self.editor_error = Some(self.store.format().invalid_message());
            }
        }
    }

    /// Reload the buffer if the document or format changed since it was
    /// last synced.
    pub fn refresh_code_from_store(&mut self) {
        if self.synced_revision != self.store.revision()
            || self.synced_format != self.store.format()
        {
            self.reload_code_editor();
        }
    }

    /// Replace the buffer with the serialized document, keeping the cursor
    /// row where possible.
    pub(super) fn reload_code_editor(&mut self) {
        let (row, col) = self.code_editor.cursor();
        match self.store.formatted_text() {
            Ok(text) => {
                self.code_editor.set_content(&text);
                self.code_editor.jump_to(row, col);
            }
            Err(err) => {
                tracing::error!(code = err.error_code(), error = %err, "failed to serialize specification");
                self.status = Some(err.user_message());
            }
        }
        self.synced_revision = self.store.revision();
        self.synced_format = self.store.format();
        self.editor_error = None;
        self.visual.clamp(self.store.document());
    }
}
