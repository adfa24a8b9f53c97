//! Left pane: tab bar plus the code editor, visual editor or outline.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{pane_block, truncate_to_width};
use super::outline::render_outline;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};
use crate::app::{App, EditorTab, FieldTarget, Focus};
use crate::spec::SpecFormat;
use crate::widgets::TextAreaInputWidget;

/// Rows given to an open multi-line field editor.
const MULTILINE_FIELD_HEIGHT: u16 = 6;

pub fn tab_bar(active: EditorTab) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for tab in EditorTab::ALL {
        let style = if tab == active {
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!("{} ", tab.key_hint()), Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(tab.label(), style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

pub fn render_editor(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    frame.render_widget(Paragraph::new(tab_bar(app.tab)), chunks[0]);

    let focused = app.focus == Focus::Editor;
    match app.tab {
        EditorTab::Code => render_code_editor(frame, chunks[1], app, focused),
        EditorTab::Visual => render_visual_editor(frame, chunks[1], app, focused),
        EditorTab::Outline => render_outline(frame, chunks[1], app, focused),
    }
}

fn render_code_editor(frame: &mut Frame, area: Rect, app: &mut App, focused: bool) {
    let title = match app.store.format() {
        SpecFormat::Yaml => " Specification (YAML) ",
        SpecFormat::Json => " Specification (JSON) ",
    };

    let editor_area = match &app.editor_error {
        Some(error) => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(area);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" {}", error),
                    Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                )),
                split[1],
            );
            split[0]
        }
        None => area,
    };

    frame.render_widget(
        TextAreaInputWidget::new(&mut app.code_editor, title, focused),
        editor_area,
    );
}

fn field_row(target: FieldTarget, value: &str, selected: bool, width: u16) -> Line<'static> {
    let label = target.label();
    let marker = if selected { "▶ " } else { "  " };
    let label_style = if selected {
        Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let shown = value.lines().next().unwrap_or_default();
    let budget = (width as usize).saturating_sub(label.len() + 6);
    let value_span = if value.is_empty() {
        Span::styled("(empty)", Style::default().fg(COLOR_BORDER))
    } else {
        Span::styled(truncate_to_width(shown, budget), Style::default().fg(COLOR_ACCENT))
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(COLOR_ACTIVE)),
        Span::styled(format!("{}: ", label), label_style),
        value_span,
    ])
}

fn render_visual_editor(frame: &mut Frame, area: Rect, app: &mut App, focused: bool) {
    let block = pane_block("Visual editor", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let doc = app.store.document().clone();
    let targets = FieldTarget::all_for(&doc);
    let selected = app.visual.selected.min(targets.len().saturating_sub(1));
    let editing = app.visual.editing;

    let mut constraints: Vec<Constraint> = Vec::with_capacity(targets.len() + 1);
    for target in &targets {
        let height = match editing {
            Some(open) if open == *target && open.multiline() => MULTILINE_FIELD_HEIGHT,
            Some(open) if open == *target => 3,
            _ => 1,
        };
        constraints.push(Constraint::Length(height));
    }
    constraints.push(Constraint::Min(0));

    // Keep the selected row on screen by dropping rows from the top.
    let mut first = 0;
    let visible = |from: usize| -> u16 {
        constraints[from..=selected.min(constraints.len() - 1)]
            .iter()
            .map(|c| match c {
                Constraint::Length(h) => *h,
                _ => 0,
            })
            .sum()
    };
    while first < selected && visible(first) > inner.height {
        first += 1;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints[first..].to_vec())
        .split(inner);

    for (slot, target) in targets.iter().enumerate().skip(first) {
        let area = rows[slot - first];
        if area.height == 0 {
            continue;
        }
        if editing == Some(*target) {
            let title = if target.multiline() {
                " Editing (Enter save · Alt+Enter newline · Esc cancel) "
            } else {
                " Editing (Enter save · Esc cancel) "
            };
            frame.render_widget(
                TextAreaInputWidget::new(&mut app.field_input, title, true),
                area,
            );
            continue;
        }
        let value = target.value_in(&doc);
        frame.render_widget(
            Paragraph::new(field_row(*target, &value, slot == selected, area.width)),
            area,
        );
    }

    if targets.iter().all(|t| t.server_index().is_none()) {
        let hint_area = rows[rows.len() - 1];
        if hint_area.height > 0 {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "  No servers yet. Press a to add one.",
                    Style::default().fg(COLOR_DIM),
                )),
                hint_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_with_mock;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &mut App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_editor(f, f.area(), app))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_tab_bar_lists_tabs() {
        let text: String = tab_bar(EditorTab::Visual)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("F1 Code"));
        assert!(text.contains("F2 Visual"));
        assert!(text.contains("F3 Outline"));
    }

    #[test]
    fn test_code_editor_shows_error_line() {
        let (mut app, _) = app_with_mock();
        app.editor_error = Some("Invalid YAML format".to_string());
        let screen = render_to_string(&mut app);
        assert!(screen.contains("Invalid YAML format"));
        assert!(screen.contains("Specification (YAML)"));
    }

    #[test]
    fn test_visual_editor_lists_fields() {
        let (mut app, _) = app_with_mock();
        app.tab = EditorTab::Visual;
        let screen = render_to_string(&mut app);
        assert!(screen.contains("My API"));
        assert!(screen.contains("No servers yet"));
    }
}
