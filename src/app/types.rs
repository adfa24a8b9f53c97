//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Focus`] - Which pane has focus
//! - [`EditorTab`] - Which surface the left pane shows
//! - [`OutlineState`] - Selection and collapse state of the outline
//! - [`VisualEditorState`] - Field selection and in-place edit state

use serde_json::Value;

use crate::spec::edit::{self, InfoField, ServerField};

/// Represents which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Editor,
    Assistant,
    Preview,
}

/// The surfaces sharing the left pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorTab {
    #[default]
    Code,
    Visual,
    Outline,
}

impl EditorTab {
    pub const ALL: [EditorTab; 3] = [EditorTab::Code, EditorTab::Visual, EditorTab::Outline];

    pub fn label(&self) -> &'static str {
        match self {
            EditorTab::Code => "Code",
            EditorTab::Visual => "Visual",
            EditorTab::Outline => "Outline",
        }
    }

    pub fn key_hint(&self) -> &'static str {
        match self {
            EditorTab::Code => "F1",
            EditorTab::Visual => "F2",
            EditorTab::Outline => "F3",
        }
    }
}

/// Collapsible sections of the outline, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineSection {
    Info,
    Servers,
    Tags,
    Security,
    Paths,
    Components,
}

impl OutlineSection {
    pub const ALL: [OutlineSection; 6] = [
        OutlineSection::Info,
        OutlineSection::Servers,
        OutlineSection::Tags,
        OutlineSection::Security,
        OutlineSection::Paths,
        OutlineSection::Components,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OutlineSection::Info => "API Info",
            OutlineSection::Servers => "Servers",
            OutlineSection::Tags => "Tags",
            OutlineSection::Security => "Security",
            OutlineSection::Paths => "Paths",
            OutlineSection::Components => "Components",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutlineState {
    pub selected: usize,
    expanded: [bool; OutlineSection::ALL.len()],
}

impl Default for OutlineState {
    fn default() -> Self {
        Self {
            selected: 0,
            expanded: [true; OutlineSection::ALL.len()],
        }
    }
}

impl OutlineState {
    pub fn selected_section(&self) -> OutlineSection {
        OutlineSection::ALL[self.selected.min(OutlineSection::ALL.len() - 1)]
    }

    pub fn is_expanded(&self, section: OutlineSection) -> bool {
        self.expanded[section as usize]
    }

    pub fn toggle_selected(&mut self) {
        let index = self.selected_section() as usize;
        self.expanded[index] = !self.expanded[index];
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(OutlineSection::ALL.len() - 1);
    }
}

/// A single editable field of the visual editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    Info(InfoField),
    Server { index: usize, field: ServerField },
}

impl FieldTarget {
    /// Every editable field for `doc`, in display order.
    pub fn all_for(doc: &Value) -> Vec<FieldTarget> {
        let mut targets: Vec<FieldTarget> =
            InfoField::ALL.iter().copied().map(FieldTarget::Info).collect();
        for index in 0..edit::server_count(doc) {
            for field in ServerField::ALL {
                targets.push(FieldTarget::Server { index, field });
            }
        }
        targets
    }

    pub fn label(&self) -> String {
        match self {
            FieldTarget::Info(field) => field.label().to_string(),
            FieldTarget::Server { index, field } => {
                format!("Server {} {}", index + 1, field.label())
            }
        }
    }

    pub fn multiline(&self) -> bool {
        match self {
            FieldTarget::Info(field) => field.multiline(),
            FieldTarget::Server { field, .. } => field.multiline(),
        }
    }

    pub fn server_index(&self) -> Option<usize> {
        match self {
            FieldTarget::Info(_) => None,
            FieldTarget::Server { index, .. } => Some(*index),
        }
    }

    pub fn value_in(&self, doc: &Value) -> String {
        match self {
            FieldTarget::Info(field) => edit::info_field(doc, *field),
            FieldTarget::Server { index, field } => edit::server_field(doc, *index, *field),
        }
    }

    /// A copy of `doc` with this field set to `value`.
    pub fn applied_to(&self, doc: &Value, value: &str) -> Value {
        match self {
            FieldTarget::Info(field) => edit::with_info_field(doc, *field, value),
            FieldTarget::Server { index, field } => {
                edit::with_server_field(doc, *index, *field, value)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VisualEditorState {
    pub selected: usize,
    /// Field currently open for editing
    pub editing: Option<FieldTarget>,
}

impl VisualEditorState {
    pub fn selected_target(&self, doc: &Value) -> Option<FieldTarget> {
        let targets = FieldTarget::all_for(doc);
        targets
            .get(self.selected.min(targets.len().saturating_sub(1)))
            .copied()
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, doc: &Value) {
        let last = FieldTarget::all_for(doc).len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    /// Keep the selection inside the field list after the document changed.
    pub fn clamp(&mut self, doc: &Value) {
        let last = FieldTarget::all_for(doc).len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }
}
