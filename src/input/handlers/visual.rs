//! Visual editor command handlers.

use crate::app::{App, EditorTab};
use crate::input::Command;

/// Handles visual editor commands.
///
/// Returns `true` if the command was handled successfully.
pub fn handle_visual_command(app: &mut App, cmd: &Command) -> bool {
    if app.tab != EditorTab::Visual {
        return false;
    }
    match cmd {
        Command::BeginFieldEdit => app.begin_field_edit(),
        Command::SaveField => app.save_field_edit(),
        Command::CancelField => app.cancel_field_edit(),
        Command::AddServer => app.add_server(),
        Command::RemoveServer => app.remove_selected_server(),
        _ => return false,
    }
    true
}
