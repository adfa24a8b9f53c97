//! Assistant command handlers.

use crate::app::App;
use crate::input::Command;

/// Handles assistant pane commands.
///
/// Returns `true` if the command was handled successfully.
pub fn handle_assistant_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::SubmitPrompt => app.submit_prompt(),
        Command::ToggleQuickPrompts => app.assistant.toggle_quick_prompts(),
        Command::QuickPromptUp => app.assistant.select_previous_quick_prompt(),
        Command::QuickPromptDown => app.assistant.select_next_quick_prompt(),
        Command::SubmitQuickPrompt => app.submit_quick_prompt(),
        Command::CloseQuickPrompts => {
            if app.assistant.quick_prompts_open() {
                app.assistant.toggle_quick_prompts();
            }
        }
        Command::OpenCredentialEntry => app.open_credential_entry(),
        Command::ConfirmCredential => app.confirm_credential(),
        Command::CancelCredential => app.cancel_credential(),
        _ => return false,
    }
    true
}
