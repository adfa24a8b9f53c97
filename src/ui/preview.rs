//! Preview pane: viewer selector and where the browser preview lives.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::pane_block;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_LINK, COLOR_WARNING};
use crate::app::{App, Focus};
use crate::preview::{Viewer, RAPIDOC_UNAVAILABLE};

pub fn viewer_selector(active: Viewer) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, viewer) in Viewer::ALL.into_iter().enumerate() {
        let style = if viewer == active {
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!("{} ", i + 1), Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(viewer.label(), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

pub fn preview_lines(app: &App) -> Vec<Line<'static>> {
    let viewer = app.store.viewer();
    let mut lines = vec![viewer_selector(viewer), Line::default()];

    match &app.preview_url {
        Some(url) => {
            lines.push(Line::from(vec![
                Span::styled("Serving at ", Style::default().fg(COLOR_DIM)),
                Span::styled(url.clone(), Style::default().fg(COLOR_LINK)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("Revision {}", app.store.revision()),
                Style::default().fg(COLOR_DIM),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "Preview server is not running",
            Style::default().fg(COLOR_DIM),
        ))),
    }

    if !viewer.is_available() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "RapiDoc Viewer",
            Style::default().fg(COLOR_WARNING).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            RAPIDOC_UNAVAILABLE,
            Style::default().fg(COLOR_WARNING),
        )));
    }

    if app.preview_url.is_some() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("o", Style::default().fg(COLOR_ACCENT)),
            Span::styled(" open in browser", Style::default().fg(COLOR_DIM)),
        ]));
    }
    lines
}

pub fn render_preview(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Preview;
    let paragraph = Paragraph::new(preview_lines(app))
        .block(pane_block("Preview", focused))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_with_mock;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_without_server() {
        let (app, _) = app_with_mock();
        let body = text(&preview_lines(&app));
        assert!(body.contains("1 Redoc"));
        assert!(body.contains("Preview server is not running"));
        assert!(!body.contains("open in browser"));
    }

    #[test]
    fn test_rapidoc_shows_notice() {
        let (mut app, _) = app_with_mock();
        app.preview_url = Some("http://127.0.0.1:4000/".to_string());
        app.store.set_viewer(Viewer::RapiDoc);
        let body = text(&preview_lines(&app));
        assert!(body.contains(RAPIDOC_UNAVAILABLE));
        assert!(body.contains("http://127.0.0.1:4000/"));
        assert!(body.contains("open in browser"));
    }
}
