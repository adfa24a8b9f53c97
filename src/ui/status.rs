//! Bottom status bar: key hints for the active pane and the last notice.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_WARNING};
use crate::app::App;
use crate::input::{ModalType, Pane};

/// Key hints as (key, action) pairs for the current input context.
pub fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = match app.active_modal() {
        ModalType::CredentialEntry => vec![("Enter", "save key"), ("Esc", "cancel")],
        ModalType::QuickPrompts => vec![
            ("↑↓", "choose"),
            ("Enter", "send"),
            ("Esc", "close"),
        ],
        ModalType::FieldEdit => {
            let mut hints = vec![("Enter", "save"), ("Esc", "cancel")];
            if app.build_input_context().field_multiline {
                hints.push(("Alt+Enter", "newline"));
            }
            hints
        }
        ModalType::None => match app.build_input_context().pane() {
            Pane::CodeEditor => vec![("Ctrl+Z", "undo"), ("Ctrl+T", "format")],
            Pane::VisualEditor => vec![
                ("↑↓", "select"),
                ("Enter", "edit"),
                ("a", "add server"),
                ("d", "remove server"),
            ],
            Pane::Outline => vec![("↑↓", "section"), ("Enter", "expand")],
            Pane::Assistant => vec![
                ("Enter", "send"),
                ("Ctrl+P", "quick prompts"),
                ("Ctrl+K", "API key"),
            ],
            Pane::Preview => vec![("1-3", "viewer"), ("o", "open in browser")],
        },
    };
    hints.extend([("F1-F3", "tabs"), ("F4/F5", "panes"), ("Ctrl+Q", "quit")]);
    hints
}

pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    if let Some(status) = &app.status {
        spans.push(Span::styled(status.clone(), Style::default().fg(COLOR_WARNING)));
        spans.push(Span::styled(" │ ", Style::default().fg(COLOR_DIM)));
    }

    for (i, (key, action)) in key_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
