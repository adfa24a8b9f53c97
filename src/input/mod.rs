//! Input handling module for keyboard and command processing.
//!
//! All input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to appropriate handlers in the [`handlers`] module
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType, Pane};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;

use crate::app::{App, EditorTab, Focus};

impl App {
    /// The modal overlay currently capturing keys.
    pub fn active_modal(&self) -> ModalType {
        match self.focus {
            Focus::Assistant if self.assistant.credential_entry_open() => {
                ModalType::CredentialEntry
            }
            Focus::Assistant if self.assistant.quick_prompts_open() => ModalType::QuickPrompts,
            Focus::Editor if self.tab == EditorTab::Visual && self.visual.editing.is_some() => {
                ModalType::FieldEdit
            }
            _ => ModalType::None,
        }
    }

    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        let modal = self.active_modal();
        let field_multiline = self
            .visual
            .editing
            .map(|target| target.multiline())
            .unwrap_or(false);
        InputContext::new()
            .with_focus(self.focus)
            .with_tab(self.tab)
            .with_modal(modal)
            .with_field_multiline(field_multiline)
    }

    /// Translate a key press and execute it.
    ///
    /// Returns `true` if the key produced a command that was handled.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctx = self.build_input_context();
        match self.registry.dispatch(key, &ctx) {
            Some(cmd) => self.execute_command(cmd),
            None => false,
        }
    }

    /// Executes a command and returns whether it was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::trace!(?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
            self.status = None;
        }
        if cmd == Command::Noop {
            return true;
        }

        let modal = self.active_modal();
        match modal {
            ModalType::QuickPrompts | ModalType::CredentialEntry => {
                if handlers::handle_assistant_command(self, &cmd) {
                    return true;
                }
            }
            ModalType::FieldEdit => {
                if handlers::handle_visual_command(self, &cmd) {
                    return true;
                }
            }
            ModalType::None => {}
        }

        if handlers::handle_editing_command(self, &cmd) {
            return true;
        }

        if handlers::handle_navigation_command(self, &cmd) {
            return true;
        }

        match self.focus {
            Focus::Assistant => handlers::handle_assistant_command(self, &cmd),
            Focus::Editor => handlers::handle_visual_command(self, &cmd),
            Focus::Preview => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_with_mock;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_active_modal() {
        let (mut app, _) = app_with_mock();
        assert_eq!(app.active_modal(), ModalType::None);

        app.focus = Focus::Assistant;
        app.assistant.toggle_quick_prompts();
        assert_eq!(app.active_modal(), ModalType::QuickPrompts);
        app.assistant.open_credential_entry();
        assert_eq!(app.active_modal(), ModalType::CredentialEntry);

        // Overlays only capture keys while their pane has focus
        app.focus = Focus::Preview;
        assert_eq!(app.active_modal(), ModalType::None);
    }

    #[test]
    fn test_visual_editor_key_flow() {
        let (mut app, _) = app_with_mock();
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_modal(), ModalType::FieldEdit);

        app.execute_command(Command::DeleteToLineStart);
        for c in "Pets".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_modal(), ModalType::None);
        assert_eq!(app.store.document()["info"]["title"], "Pets");

        // 'a' adds a server when no field is open
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.store.document()["servers"][0]["url"], "https://");
    }

    #[test]
    fn test_field_escape_cancels() {
        let (mut app, _) = app_with_mock();
        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_modal(), ModalType::None);
        assert_eq!(app.store.document()["info"]["title"], "My API");
    }

    #[test]
    fn test_format_toggle_key() {
        let (mut app, _) = app_with_mock();
        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert!(app.code_editor.content().starts_with('{'));
    }

    #[test]
    fn test_preview_keys_switch_viewer() {
        let (mut app, _) = app_with_mock();
        press(&mut app, KeyCode::F(5));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.store.viewer(), crate::preview::Viewer::RapiDoc);
    }

    #[test]
    fn test_typing_in_code_editor_updates_store() {
        let (mut app, _) = app_with_mock();
        app.execute_command(Command::MoveCursorBottom);
        press(&mut app, KeyCode::Enter);
        for c in "x-note: hi".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.store.document()["x-note"], "hi");
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _) = app_with_mock();
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
