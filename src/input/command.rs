//! Command definitions for keyboard input handling.
//!
//! This module defines all commands that can be triggered by keyboard input.
//! The [`Command`] enum provides a unified way to represent user actions,
//! decoupling key bindings from their effects.

use crate::app::EditorTab;
use crate::preview::Viewer;

/// Represents all possible commands that can be triggered by keyboard input.
///
/// Commands are organized into categories:
/// - Global commands (quit, pane switching, format toggle)
/// - Pane commands (visual editor, outline, preview, assistant)
/// - Input/editing commands (character input, cursor movement, text manipulation)
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, Ctrl+Q)
    Quit,
    /// Show an editor tab and focus the left pane (F1-F3)
    ShowTab(EditorTab),
    /// Focus the assistant pane (F4)
    FocusAssistant,
    /// Focus the preview pane (F5)
    FocusPreview,
    /// Switch the text format between YAML and JSON (Ctrl+T)
    ToggleFormat,

    // =========================================================================
    // List Navigation (visual editor, outline)
    // =========================================================================
    MoveUp,
    MoveDown,

    // =========================================================================
    // Visual Editor
    // =========================================================================
    /// Open the selected field for editing
    BeginFieldEdit,
    /// Commit the field being edited
    SaveField,
    /// Drop the field edit without committing
    CancelField,
    AddServer,
    /// Remove the server owning the selected field
    RemoveServer,

    // =========================================================================
    // Outline
    // =========================================================================
    /// Expand or collapse the selected section
    ToggleSection,

    // =========================================================================
    // Preview
    // =========================================================================
    SelectViewer(Viewer),
    /// Open the preview server page in the system browser
    OpenPreview,

    // =========================================================================
    // Assistant
    // =========================================================================
    /// Send the prompt text to the assistant
    SubmitPrompt,
    ToggleQuickPrompts,
    QuickPromptUp,
    QuickPromptDown,
    /// Send the highlighted quick prompt
    SubmitQuickPrompt,
    CloseQuickPrompts,
    OpenCredentialEntry,
    ConfirmCredential,
    CancelCredential,

    // =========================================================================
    // Text Editing
    // =========================================================================
    InsertChar(char),
    InsertNewline,
    /// Insert indentation
    InsertTab,
    Backspace,
    DeleteChar,
    DeleteWordBackward,
    DeleteToLineStart,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorHome,
    MoveCursorEnd,
    MoveCursorWordLeft,
    MoveCursorWordRight,
    MoveCursorTop,
    MoveCursorBottom,
    ScrollPageUp,
    ScrollPageDown,
    Undo,
    Redo,
    /// Bracketed paste from the terminal
    Paste(String),

    // =========================================================================
    // System
    // =========================================================================
    /// Key consumed without effect
    Noop,
}

impl Command {
    /// Returns true if this command should trigger a UI redraw.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    /// Returns true if this command is a quit command.
    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    /// Returns true if this command edits text in a buffer.
    pub fn is_text_edit(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertNewline
                | Command::InsertTab
                | Command::Backspace
                | Command::DeleteChar
                | Command::DeleteWordBackward
                | Command::DeleteToLineStart
                | Command::Undo
                | Command::Redo
                | Command::Paste(_)
        )
    }

    /// Returns a human-readable description of the command.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit application",
            Command::ShowTab(EditorTab::Code) => "Show code editor",
            Command::ShowTab(EditorTab::Visual) => "Show visual editor",
            Command::ShowTab(EditorTab::Outline) => "Show outline",
            Command::FocusAssistant => "Focus assistant",
            Command::FocusPreview => "Focus preview",
            Command::ToggleFormat => "Toggle YAML/JSON",
            Command::MoveUp => "Move selection up",
            Command::MoveDown => "Move selection down",
            Command::BeginFieldEdit => "Edit field",
            Command::SaveField => "Save field",
            Command::CancelField => "Cancel edit",
            Command::AddServer => "Add server",
            Command::RemoveServer => "Remove server",
            Command::ToggleSection => "Expand/collapse section",
            Command::SelectViewer(_) => "Select viewer",
            Command::OpenPreview => "Open preview in browser",
            Command::SubmitPrompt => "Ask assistant",
            Command::ToggleQuickPrompts => "Quick prompts",
            Command::QuickPromptUp => "Previous quick prompt",
            Command::QuickPromptDown => "Next quick prompt",
            Command::SubmitQuickPrompt => "Send quick prompt",
            Command::CloseQuickPrompts => "Close quick prompts",
            Command::OpenCredentialEntry => "Enter API key",
            Command::ConfirmCredential => "Save API key",
            Command::CancelCredential => "Close API key entry",
            Command::InsertChar(_) => "Insert character",
            Command::InsertNewline => "Insert newline",
            Command::InsertTab => "Indent",
            Command::Backspace => "Delete backward",
            Command::DeleteChar => "Delete forward",
            Command::DeleteWordBackward => "Delete word backward",
            Command::DeleteToLineStart => "Delete to line start",
            Command::MoveCursorLeft => "Move cursor left",
            Command::MoveCursorRight => "Move cursor right",
            Command::MoveCursorUp => "Move cursor up",
            Command::MoveCursorDown => "Move cursor down",
            Command::MoveCursorHome => "Move cursor to line start",
            Command::MoveCursorEnd => "Move cursor to line end",
            Command::MoveCursorWordLeft => "Move cursor word left",
            Command::MoveCursorWordRight => "Move cursor word right",
            Command::MoveCursorTop => "Move cursor to top",
            Command::MoveCursorBottom => "Move cursor to bottom",
            Command::ScrollPageUp => "Page up",
            Command::ScrollPageDown => "Page down",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Paste(_) => "Paste",
            Command::Noop => "No operation",
        }
    }
}
