//! Text area wrapper used by every editable surface.
//!
//! The code editor, the assistant prompt, the credential entry and the field
//! editor all share this type. It keeps the handful of settings that have to
//! survive a wholesale content reload (mask, placeholder, line numbers), so
//! callers never touch tui-textarea directly.

mod cursor;
mod editing;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};
use tui_textarea::{CursorMove, TextArea};

#[derive(Debug, Clone)]
pub struct TextAreaInput<'a> {
    pub(super) textarea: TextArea<'a>,
    mask: Option<char>,
    placeholder: Option<String>,
    line_numbers: bool,
}

impl Default for TextAreaInput<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TextAreaInput<'a> {
    /// Create a new empty TextAreaInput
    pub fn new() -> Self {
        let mut input = Self {
            textarea: TextArea::default(),
            mask: None,
            placeholder: None,
            line_numbers: false,
        };
        input.apply_settings();
        input
    }

    /// Create a TextAreaInput with initial content, cursor at the top.
    pub fn with_content(content: &str) -> Self {
        let mut input = Self::new();
        input.set_content(content);
        input
    }

    /// Hide the typed characters behind `mask`.
    pub fn masked(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self.apply_settings();
        self
    }

    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self.apply_settings();
        self
    }

    pub fn with_line_numbers(mut self) -> Self {
        self.line_numbers = true;
        self.apply_settings();
        self
    }

    fn apply_settings(&mut self) {
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea
            .set_cursor_style(Style::default().fg(Color::Black).bg(Color::White));
        self.textarea.set_tab_length(2);
        if let Some(mask) = self.mask {
            self.textarea.set_mask_char(mask);
        }
        if let Some(text) = &self.placeholder {
            self.textarea.set_placeholder_text(text.clone());
            self.textarea
                .set_placeholder_style(Style::default().fg(Color::DarkGray));
        }
        if self.line_numbers {
            self.textarea
                .set_line_number_style(Style::default().fg(Color::DarkGray));
        }
    }

    // =========================================================================
    // Content methods
    // =========================================================================

    /// Replace the whole buffer. Undo history starts over.
    pub fn set_content(&mut self, text: &str) {
        let lines: Vec<String> = text.lines().map(String::from).collect();
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        self.textarea = TextArea::new(lines);
        self.apply_settings();
        self.textarea.move_cursor(CursorMove::Top);
    }

    /// Clear all content and reset cursor
    pub fn clear(&mut self) {
        self.set_content("");
    }

    /// Get the current content of the input as a single string
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|l| l.is_empty())
    }

    pub fn line_count(&self) -> usize {
        self.textarea.lines().len().max(1)
    }

    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    pub fn inner(&self) -> &TextArea<'a> {
        &self.textarea
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Set the border block and cursor visibility for the next render.
    pub fn configure_for_render(&mut self, title: &'a str, focused: bool) {
        let border_color = if focused { Color::Gray } else { Color::DarkGray };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        self.textarea.set_block(block);

        if focused {
            self.textarea
                .set_cursor_style(Style::default().fg(Color::Black).bg(Color::White));
        } else {
            self.textarea.set_cursor_style(Style::default());
        }
    }

    pub fn render_with_title(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        title: &'a str,
        focused: bool,
    ) {
        self.configure_for_render(title, focused);
        (&self.textarea).render(area, buf);
    }
}

/// A renderable wrapper for TextAreaInput that implements the Widget trait
pub struct TextAreaInputWidget<'a, 'b> {
    textarea_input: &'b mut TextAreaInput<'a>,
    title: &'a str,
    focused: bool,
}

impl<'a, 'b> TextAreaInputWidget<'a, 'b> {
    pub fn new(textarea_input: &'b mut TextAreaInput<'a>, title: &'a str, focused: bool) -> Self {
        Self {
            textarea_input,
            title,
            focused,
        }
    }
}

impl Widget for TextAreaInputWidget<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.textarea_input
            .render_with_title(area, buf, self.title, self.focused);
    }
}
