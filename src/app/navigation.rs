//! Focus, tab and selection movement.

use super::{App, EditorTab, Focus};

impl App {
    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show `tab` in the left pane and focus it.
    pub fn show_tab(&mut self, tab: EditorTab) {
        if self.tab != tab {
            self.cancel_field_edit();
        }
        self.tab = tab;
        self.focus = Focus::Editor;
    }

    pub fn focus_assistant(&mut self) {
        self.focus = Focus::Assistant;
    }

    pub fn focus_preview(&mut self) {
        self.focus = Focus::Preview;
    }

    /// Switch YAML/JSON and re-render the buffer from the document.
    pub fn toggle_format(&mut self) {
        let next = self.store.format().toggled();
        self.store.set_format(next);
        self.refresh_code_from_store();
        self.status = Some(format!("Format: {}", next.label()));
    }

    pub fn move_selection_up(&mut self) {
        match self.tab {
            EditorTab::Visual => self.visual.select_previous(),
            EditorTab::Outline => self.outline.select_previous(),
            EditorTab::Code => {}
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.tab {
            EditorTab::Visual => self.visual.select_next(self.store.document()),
            EditorTab::Outline => self.outline.select_next(),
            EditorTab::Code => {}
        }
    }
}
