//! Navigation command handlers.
//!
//! Handles quitting, pane and tab switching, the format toggle, list
//! selection in the visual editor and outline, and the preview pane.

use crate::app::App;
use crate::input::Command;

/// Handles navigation-related commands.
///
/// Returns `true` if the command was handled successfully.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => {
            app.quit();
            true
        }
        Command::ShowTab(tab) => {
            app.show_tab(*tab);
            true
        }
        Command::FocusAssistant => {
            app.focus_assistant();
            true
        }
        Command::FocusPreview => {
            app.focus_preview();
            true
        }
        Command::ToggleFormat => {
            app.toggle_format();
            true
        }
        Command::MoveUp => {
            app.move_selection_up();
            true
        }
        Command::MoveDown => {
            app.move_selection_down();
            true
        }
        Command::ToggleSection => {
            app.outline.toggle_selected();
            true
        }
        Command::SelectViewer(viewer) => {
            app.select_viewer(*viewer);
            true
        }
        Command::OpenPreview => {
            app.open_preview();
            true
        }
        _ => false,
    }
}
