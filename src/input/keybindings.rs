//! Default keybindings for the application.
//!
//! This module defines the default key bindings that map key combinations
//! to commands.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::{ModalType, Pane};
use crate::app::EditorTab;
use crate::preview::Viewer;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Creates a key combo with Alt modifier.
    pub const fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (active unless a modal claims the key)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Keybindings per focused pane
    pub pane: HashMap<Pane, HashMap<KeyCombo, Command>>,
    /// Editing keys shared by every text buffer
    pub input_editing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            pane: HashMap::new(),
            input_editing: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_pane_bindings();
        config.setup_input_editing_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('q')), Command::Quit);

        self.global.insert(
            KeyCombo::plain(KeyCode::F(1)),
            Command::ShowTab(EditorTab::Code),
        );
        self.global.insert(
            KeyCombo::plain(KeyCode::F(2)),
            Command::ShowTab(EditorTab::Visual),
        );
        self.global.insert(
            KeyCombo::plain(KeyCode::F(3)),
            Command::ShowTab(EditorTab::Outline),
        );
        self.global
            .insert(KeyCombo::plain(KeyCode::F(4)), Command::FocusAssistant);
        self.global
            .insert(KeyCombo::plain(KeyCode::F(5)), Command::FocusPreview);

        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('t')), Command::ToggleFormat);
    }

    fn setup_modal_bindings(&mut self) {
        let mut quick_prompts = HashMap::new();
        quick_prompts.insert(KeyCombo::plain(KeyCode::Up), Command::QuickPromptUp);
        quick_prompts.insert(KeyCombo::plain(KeyCode::Down), Command::QuickPromptDown);
        quick_prompts.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitQuickPrompt);
        quick_prompts.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseQuickPrompts);
        quick_prompts.insert(
            KeyCombo::ctrl(KeyCode::Char('p')),
            Command::ToggleQuickPrompts,
        );
        self.modal.insert(ModalType::QuickPrompts, quick_prompts);

        let mut credential = HashMap::new();
        credential.insert(KeyCombo::plain(KeyCode::Enter), Command::ConfirmCredential);
        credential.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelCredential);
        self.modal.insert(ModalType::CredentialEntry, credential);

        let mut field_edit = HashMap::new();
        field_edit.insert(KeyCombo::plain(KeyCode::Enter), Command::SaveField);
        field_edit.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelField);
        field_edit.insert(KeyCombo::alt(KeyCode::Enter), Command::InsertNewline);
        self.modal.insert(ModalType::FieldEdit, field_edit);
    }

    fn setup_pane_bindings(&mut self) {
        let mut code = HashMap::new();
        code.insert(KeyCombo::plain(KeyCode::Enter), Command::InsertNewline);
        code.insert(KeyCombo::plain(KeyCode::Tab), Command::InsertTab);
        code.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        code.insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);
        self.pane.insert(Pane::CodeEditor, code);

        let mut visual = HashMap::new();
        visual.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        visual.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        visual.insert(KeyCombo::plain(KeyCode::Enter), Command::BeginFieldEdit);
        visual.insert(KeyCombo::plain(KeyCode::Char('a')), Command::AddServer);
        visual.insert(KeyCombo::plain(KeyCode::Char('d')), Command::RemoveServer);
        self.pane.insert(Pane::VisualEditor, visual);

        let mut outline = HashMap::new();
        outline.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        outline.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        outline.insert(KeyCombo::plain(KeyCode::Enter), Command::ToggleSection);
        self.pane.insert(Pane::Outline, outline);

        let mut assistant = HashMap::new();
        assistant.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitPrompt);
        assistant.insert(KeyCombo::alt(KeyCode::Enter), Command::InsertNewline);
        assistant.insert(
            KeyCombo::ctrl(KeyCode::Char('p')),
            Command::ToggleQuickPrompts,
        );
        assistant.insert(
            KeyCombo::ctrl(KeyCode::Char('k')),
            Command::OpenCredentialEntry,
        );
        self.pane.insert(Pane::Assistant, assistant);

        let mut preview = HashMap::new();
        for (index, viewer) in Viewer::ALL.into_iter().enumerate() {
            let digit = char::from(b'1' + index as u8);
            preview.insert(
                KeyCombo::plain(KeyCode::Char(digit)),
                Command::SelectViewer(viewer),
            );
        }
        preview.insert(KeyCombo::plain(KeyCode::Char('o')), Command::OpenPreview);
        self.pane.insert(Pane::Preview, preview);
    }

    fn setup_input_editing_bindings(&mut self) {
        // Navigation
        self.input_editing
            .insert(KeyCombo::plain(KeyCode::Left), Command::MoveCursorLeft);
        self.input_editing
            .insert(KeyCombo::plain(KeyCode::Right), Command::MoveCursorRight);
        self.input_editing
            .insert(KeyCombo::plain(KeyCode::Up), Command::MoveCursorUp);
        self.input_editing
            .insert(KeyCombo::plain(KeyCode::Down), Command::MoveCursorDown);
        self.input_editing
            .insert(KeyCombo::plain(KeyCode::Home), Command::MoveCursorHome);
        self.input_editing
            .insert(KeyCombo::plain(KeyCode::End), Command::MoveCursorEnd);
        self.input_editing
            .insert(KeyCombo::ctrl(KeyCode::Home), Command::MoveCursorTop);
        self.input_editing
            .insert(KeyCombo::ctrl(KeyCode::End), Command::MoveCursorBottom);

        // Word navigation (Alt+Arrow)
        self.input_editing
            .insert(KeyCombo::alt(KeyCode::Left), Command::MoveCursorWordLeft);
        self.input_editing
            .insert(KeyCombo::alt(KeyCode::Right), Command::MoveCursorWordRight);

        // Deletion
        self.input_editing
            .insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        self.input_editing
            .insert(KeyCombo::plain(KeyCode::Delete), Command::DeleteChar);
        self.input_editing.insert(
            KeyCombo::alt(KeyCode::Backspace),
            Command::DeleteWordBackward,
        );
        self.input_editing.insert(
            KeyCombo::ctrl(KeyCode::Char('w')),
            Command::DeleteWordBackward,
        );
        self.input_editing.insert(
            KeyCombo::ctrl(KeyCode::Char('u')),
            Command::DeleteToLineStart,
        );

        // History
        self.input_editing
            .insert(KeyCombo::ctrl(KeyCode::Char('z')), Command::Undo);
        self.input_editing
            .insert(KeyCombo::ctrl(KeyCode::Char('y')), Command::Redo);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_pane(&self, pane: Pane, combo: &KeyCombo) -> Option<&Command> {
        self.pane.get(&pane).and_then(|m| m.get(combo))
    }

    pub fn get_input_editing(&self, combo: &KeyCombo) -> Option<&Command> {
        self.input_editing.get(combo)
    }
}
