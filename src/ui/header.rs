//! Header bar: document title, version, logo and the active format/viewer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::truncate_to_width;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_LINK};
use crate::app::App;
use crate::spec::outline;

pub fn header_line(app: &App, width: u16) -> Line<'static> {
    let info = outline::info(app.store.document());
    let title = if info.title.is_empty() {
        "Untitled API".to_string()
    } else {
        info.title
    };

    let mut spans = vec![
        Span::styled(
            " specdeck ",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            truncate_to_width(&title, (width as usize / 3).max(8)),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
    ];
    if !info.version.is_empty() {
        spans.push(Span::styled(
            format!(" v{}", info.version),
            Style::default().fg(COLOR_DIM),
        ));
    }
    if let Some(logo) = info.logo_url {
        spans.push(Span::styled("  logo ", Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(
            truncate_to_width(&logo, 32),
            Style::default().fg(COLOR_LINK),
        ));
    }
    spans.push(Span::styled(
        format!(
            "  │ {} │ {}",
            app.store.format().label(),
            app.store.viewer().label()
        ),
        Style::default().fg(COLOR_DIM),
    ));
    Line::from(spans)
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = header_line(app, area.width);
    let paragraph = if area.height >= 3 {
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
    } else {
        Paragraph::new(line)
    };
    frame.render_widget(paragraph, area);
}
