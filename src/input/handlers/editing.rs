//! Editing command handlers.
//!
//! Handles commands related to text input, cursor movement,
//! and text manipulation in the focused buffer.

use crate::app::App;
use crate::input::context::{ModalType, Pane};
use crate::input::Command;
use crate::widgets::TextAreaInput;

/// The buffer that receives editing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    Code,
    Prompt,
    Credential,
    Field,
}

impl TextTarget {
    /// Resolve the buffer from the current modal and pane.
    pub fn for_app(app: &App) -> Option<Self> {
        let ctx = app.build_input_context();
        match ctx.modal {
            ModalType::CredentialEntry => Some(TextTarget::Credential),
            ModalType::FieldEdit => Some(TextTarget::Field),
            ModalType::QuickPrompts | ModalType::None => match ctx.pane() {
                Pane::CodeEditor => Some(TextTarget::Code),
                Pane::Assistant => Some(TextTarget::Prompt),
                Pane::VisualEditor | Pane::Outline | Pane::Preview => None,
            },
        }
    }

    fn buffer<'a>(&self, app: &'a mut App) -> &'a mut TextAreaInput<'static> {
        match self {
            TextTarget::Code => &mut app.code_editor,
            TextTarget::Prompt => &mut app.prompt_input,
            TextTarget::Credential => &mut app.credential_input,
            TextTarget::Field => &mut app.field_input,
        }
    }
}

/// Handles editing-related commands.
///
/// Returns `true` if the command was handled successfully.
pub fn handle_editing_command(app: &mut App, cmd: &Command) -> bool {
    let Some(target) = TextTarget::for_app(app) else {
        return false;
    };
    let buffer = target.buffer(app);

    match cmd {
        Command::InsertChar(c) => buffer.insert_char(*c),
        Command::InsertNewline => buffer.insert_newline(),
        Command::InsertTab => buffer.insert_tab(),
        Command::Backspace => buffer.backspace(),
        Command::DeleteChar => buffer.delete_char(),
        Command::DeleteWordBackward => buffer.delete_word_backward(),
        Command::DeleteToLineStart => buffer.delete_to_line_start(),
        Command::MoveCursorLeft => buffer.move_cursor_left(),
        Command::MoveCursorRight => buffer.move_cursor_right(),
        Command::MoveCursorUp => buffer.move_cursor_up(),
        Command::MoveCursorDown => buffer.move_cursor_down(),
        Command::MoveCursorHome => buffer.move_cursor_home(),
        Command::MoveCursorEnd => buffer.move_cursor_end(),
        Command::MoveCursorWordLeft => buffer.move_cursor_word_left(),
        Command::MoveCursorWordRight => buffer.move_cursor_word_right(),
        Command::MoveCursorTop => buffer.move_cursor_top(),
        Command::MoveCursorBottom => buffer.move_cursor_bottom(),
        Command::ScrollPageUp => buffer.page_up(),
        Command::ScrollPageDown => buffer.page_down(),
        Command::Undo => {
            buffer.undo();
        }
        Command::Redo => {
            buffer.redo();
        }
        Command::Paste(text) => {
            // Single-line buffers keep only the first line
            match target {
                TextTarget::Credential => buffer.insert_str(text.lines().next().unwrap_or_default()),
                _ => buffer.insert_str(text),
            }
        }
        _ => return false,
    }

    if target == TextTarget::Code && cmd.is_text_edit() {
        app.sync_code_to_store();
    }
    true
}
