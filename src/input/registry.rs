//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] provides a centralized place for mapping key events
//! to commands based on the current application context. It handles:
//! - Modal bindings (quick prompts, credential entry, field edit)
//! - Global bindings (pane switching, format toggle)
//! - Pane bindings (code editor, visual editor, outline, assistant, preview)
//! - Text input for whichever buffer currently owns the keyboard

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
///
/// Priority, highest first:
/// 1. Ctrl+C, which always quits
/// 2. Modal bindings when a modal is active
/// 3. Global bindings
/// 4. The modal's text buffer (credential entry, field edit)
/// 5. Pane bindings
/// 6. Text input when the pane holds a text buffer
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Creates a command registry with a custom keybinding configuration.
    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers);

        if context.is_modal_active() {
            if let Some(cmd) = self.config.get_modal(context.modal, &combo) {
                return Some(self.resolve_modal_command(cmd, context));
            }
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        match context.modal {
            ModalType::CredentialEntry | ModalType::FieldEdit => {
                // The modal buffer owns the keyboard; unknown keys are swallowed
                return Some(self.dispatch_text(key).unwrap_or(Command::Noop));
            }
            ModalType::QuickPrompts | ModalType::None => {}
        }

        let pane = context.pane();
        if let Some(cmd) = self.config.get_pane(pane, &combo) {
            return Some(cmd.clone());
        }

        if pane.accepts_text() {
            self.dispatch_text(key)
        } else {
            None
        }
    }

    fn resolve_modal_command(&self, cmd: &Command, context: &InputContext) -> Command {
        match cmd {
            Command::InsertNewline
                if context.modal == ModalType::FieldEdit && !context.field_multiline =>
            {
                Command::Noop
            }
            other => other.clone(),
        }
    }

    /// Editing keys first, then printable characters.
    fn dispatch_text(&self, key: KeyEvent) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);
        if let Some(cmd) = self.config.get_input_editing(&combo) {
            return Some(cmd.clone());
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{EditorTab, Focus};
    use crate::preview::Viewer;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_custom_global_binding() {
        let mut config = KeybindingConfig::default();
        config
            .global
            .insert(KeyCombo::plain(KeyCode::F(9)), Command::ToggleFormat);
        let registry = CommandRegistry::with_config(config);
        assert_eq!(
            registry.dispatch(key(KeyCode::F(9)), &InputContext::new()),
            Some(Command::ToggleFormat)
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_modal(ModalType::CredentialEntry);
        assert_eq!(
            registry.dispatch(key_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &ctx),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_code_editor_types_characters() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('x')), &ctx),
            Some(Command::InsertChar('x'))
        );
        assert_eq!(
            registry.dispatch(key_with(KeyCode::Char('X'), KeyModifiers::SHIFT), &ctx),
            Some(Command::InsertChar('X'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Tab), &ctx),
            Some(Command::InsertTab)
        );
        assert_eq!(
            registry.dispatch(key_with(KeyCode::Char('z'), KeyModifiers::CONTROL), &ctx),
            Some(Command::Undo)
        );
    }

    #[test]
    fn test_visual_editor_letters_are_commands() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_tab(EditorTab::Visual);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('a')), &ctx),
            Some(Command::AddServer)
        );
        assert_eq!(registry.dispatch(key(KeyCode::Char('z')), &ctx), None);
    }

    #[test]
    fn test_field_edit_captures_text() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new()
            .with_tab(EditorTab::Visual)
            .with_modal(ModalType::FieldEdit);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('a')), &ctx),
            Some(Command::InsertChar('a'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Enter), &ctx),
            Some(Command::SaveField)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Tab), &ctx),
            Some(Command::Noop)
        );
    }

    #[test]
    fn test_field_newline_only_when_multiline() {
        let registry = CommandRegistry::new();
        let alt_enter = key_with(KeyCode::Enter, KeyModifiers::ALT);
        let ctx = InputContext::new().with_modal(ModalType::FieldEdit);
        assert_eq!(registry.dispatch(alt_enter, &ctx), Some(Command::Noop));
        let ctx = ctx.with_field_multiline(true);
        assert_eq!(
            registry.dispatch(alt_enter, &ctx),
            Some(Command::InsertNewline)
        );
    }

    #[test]
    fn test_globals_escape_modals() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new()
            .with_focus(Focus::Assistant)
            .with_modal(ModalType::CredentialEntry);
        assert_eq!(
            registry.dispatch(key(KeyCode::F(5)), &ctx),
            Some(Command::FocusPreview)
        );
    }

    #[test]
    fn test_quick_prompts_fall_through_to_prompt() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new()
            .with_focus(Focus::Assistant)
            .with_modal(ModalType::QuickPrompts);
        assert_eq!(
            registry.dispatch(key(KeyCode::Down), &ctx),
            Some(Command::QuickPromptDown)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Enter), &ctx),
            Some(Command::SubmitQuickPrompt)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('h')), &ctx),
            Some(Command::InsertChar('h'))
        );
    }

    #[test]
    fn test_preview_keys() {
        let registry = CommandRegistry::new();
        let ctx = InputContext::new().with_focus(Focus::Preview);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('2')), &ctx),
            Some(Command::SelectViewer(Viewer::SwaggerUi))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('o')), &ctx),
            Some(Command::OpenPreview)
        );
        assert_eq!(registry.dispatch(key(KeyCode::Char('x')), &ctx), None);
    }
}
