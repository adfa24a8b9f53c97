//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the current application state relevant to
//! input handling, allowing the command registry to dispatch appropriate
//! commands based on the current modal, focus, and editor tab.

use crate::app::{EditorTab, Focus};

/// The type of modal overlay currently capturing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// Quick prompt list is open over the assistant prompt
    QuickPrompts,
    /// API key entry is open in the assistant pane
    CredentialEntry,
    /// A visual editor field is being edited in place
    FieldEdit,
}

/// The pane that receives focus bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    CodeEditor,
    VisualEditor,
    Outline,
    Assistant,
    Preview,
}

impl Pane {
    pub fn resolve(focus: Focus, tab: EditorTab) -> Self {
        match (focus, tab) {
            (Focus::Editor, EditorTab::Code) => Pane::CodeEditor,
            (Focus::Editor, EditorTab::Visual) => Pane::VisualEditor,
            (Focus::Editor, EditorTab::Outline) => Pane::Outline,
            (Focus::Assistant, _) => Pane::Assistant,
            (Focus::Preview, _) => Pane::Preview,
        }
    }

    /// Whether unbound printable keys are typed into a text buffer.
    pub fn accepts_text(&self) -> bool {
        matches!(self, Pane::CodeEditor | Pane::Assistant)
    }
}

/// Context information for input handling.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub focus: Focus,
    pub tab: EditorTab,
    pub modal: ModalType,
    /// Whether the field being edited accepts newlines
    pub field_multiline: bool,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_tab(mut self, tab: EditorTab) -> Self {
        self.tab = tab;
        self
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_field_multiline(mut self, multiline: bool) -> Self {
        self.field_multiline = multiline;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    pub fn pane(&self) -> Pane {
        Pane::resolve(self.focus, self.tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = InputContext::new();
        assert!(!ctx.is_modal_active());
        assert_eq!(ctx.pane(), Pane::CodeEditor);
    }

    #[test]
    fn test_pane_follows_tab_only_for_editor_focus() {
        let ctx = InputContext::new().with_tab(EditorTab::Outline);
        assert_eq!(ctx.pane(), Pane::Outline);
        let ctx = ctx.with_focus(Focus::Preview);
        assert_eq!(ctx.pane(), Pane::Preview);
        assert!(!ctx.pane().accepts_text());
    }

    #[test]
    fn test_modal_builder() {
        let ctx = InputContext::new()
            .with_modal(ModalType::FieldEdit)
            .with_field_multiline(true);
        assert!(ctx.is_modal_active());
        assert!(ctx.field_multiline);
    }
}
