//! Cursor movement for TextAreaInput.

use super::TextAreaInput;
use tui_textarea::{CursorMove, Scrolling};

impl<'a> TextAreaInput<'a> {
    pub fn move_cursor_left(&mut self) {
        self.textarea.move_cursor(CursorMove::Back);
    }

    pub fn move_cursor_right(&mut self) {
        self.textarea.move_cursor(CursorMove::Forward);
    }

    pub fn move_cursor_up(&mut self) {
        self.textarea.move_cursor(CursorMove::Up);
    }

    pub fn move_cursor_down(&mut self) {
        self.textarea.move_cursor(CursorMove::Down);
    }

    /// Move cursor to the beginning of the current line
    pub fn move_cursor_home(&mut self) {
        self.textarea.move_cursor(CursorMove::Head);
    }

    /// Move cursor to the end of the current line
    pub fn move_cursor_end(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn move_cursor_word_left(&mut self) {
        self.textarea.move_cursor(CursorMove::WordBack);
    }

    pub fn move_cursor_word_right(&mut self) {
        self.textarea.move_cursor(CursorMove::WordForward);
    }

    pub fn move_cursor_top(&mut self) {
        self.textarea.move_cursor(CursorMove::Top);
    }

    pub fn move_cursor_bottom(&mut self) {
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn page_up(&mut self) {
        self.textarea.scroll(Scrolling::PageUp);
    }

    pub fn page_down(&mut self) {
        self.textarea.scroll(Scrolling::PageDown);
    }

    /// Move to (row, col), clamped to the content.
    pub fn jump_to(&mut self, row: usize, col: usize) {
        let row = row.min(u16::MAX as usize) as u16;
        let col = col.min(u16::MAX as usize) as u16;
        self.textarea.move_cursor(CursorMove::Jump(row, col));
    }

    /// Current cursor position as (row, col)
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }
}
