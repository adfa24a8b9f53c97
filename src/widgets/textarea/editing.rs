//! Editing operations for TextAreaInput.

use super::TextAreaInput;

impl<'a> TextAreaInput<'a> {
    pub fn insert_char(&mut self, c: char) {
        self.textarea.insert_char(c);
    }

    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    /// Insert indentation (spaces, per the configured tab length).
    pub fn insert_tab(&mut self) {
        self.textarea.insert_tab();
    }

    /// Insert pasted text. Carriage returns from terminals are normalized.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.textarea.insert_str(normalized);
    }

    /// Delete the character before the cursor (like Backspace key)
    pub fn backspace(&mut self) {
        self.textarea.delete_char();
    }

    /// Delete the character at the cursor (like Delete key)
    pub fn delete_char(&mut self) {
        self.textarea.delete_next_char();
    }

    pub fn delete_word_backward(&mut self) {
        self.textarea.delete_word();
    }

    pub fn delete_to_line_start(&mut self) {
        self.textarea.delete_line_by_head();
    }

    pub fn undo(&mut self) -> bool {
        self.textarea.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.textarea.redo()
    }
}
