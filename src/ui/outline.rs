//! Read-only outline of the document.
//!
//! Sections collapse independently; the body is rebuilt from the document on
//! every frame.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use serde_json::Value;

use super::helpers::pane_block;
use super::theme::{method_color, COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_LINK};
use crate::app::{App, OutlineSection, OutlineState};
use crate::spec::outline;

const INDENT: &str = "  ";

fn notice(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}{}", INDENT, text),
        Style::default().fg(COLOR_DIM),
    ))
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}{}: ", INDENT, label), Style::default().fg(COLOR_DIM)),
        Span::raw(value),
    ])
}

fn info_lines(doc: &Value, lines: &mut Vec<Line<'static>>) {
    let info = outline::info(doc);
    lines.push(field("Title", info.title));
    lines.push(field("Version", info.version));
    if let Some(description) = info.description {
        lines.push(field("Description", description));
    }
    if let Some(terms) = info.terms_of_service {
        lines.push(field("Terms of Service", terms));
    }
    if let Some(contact) = info.contact {
        let parts: Vec<String> = [contact.name, contact.email, contact.url]
            .into_iter()
            .flatten()
            .collect();
        if !parts.is_empty() {
            lines.push(field("Contact", parts.join(" · ")));
        }
    }
    if let Some(license) = info.license {
        let text = match license.url {
            Some(url) => format!("{} ({})", license.name, url),
            None => license.name,
        };
        lines.push(field("License", text));
    }
    if let Some(logo) = info.logo_url {
        lines.push(field("Logo", logo));
    }
}

fn server_lines(doc: &Value, lines: &mut Vec<Line<'static>>) {
    let servers = outline::servers(doc);
    if servers.is_empty() {
        lines.push(notice("No servers defined. Default to the current host."));
        return;
    }
    for server in servers {
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(server.url, Style::default().fg(COLOR_LINK)),
        ]));
        if let Some(description) = server.description {
            lines.push(notice(&format!("{}{}", INDENT, description)));
        }
        for variable in server.variables {
            let mut text = format!("{{{}}} = {}", variable.name, variable.default);
            if !variable.options.is_empty() {
                text.push_str(&format!(" [{}]", variable.options.join(", ")));
            }
            if let Some(description) = variable.description {
                text.push_str(&format!(" - {}", description));
            }
            lines.push(notice(&format!("{}{}", INDENT, text)));
        }
    }
}

fn tag_lines(doc: &Value, lines: &mut Vec<Line<'static>>) {
    let tags = outline::tags(doc);
    if tags.is_empty() {
        lines.push(notice("No tags defined."));
        return;
    }
    for tag in tags {
        let mut spans = vec![
            Span::raw(INDENT),
            Span::styled(tag.name, Style::default().add_modifier(Modifier::BOLD)),
        ];
        if let Some(description) = tag.description {
            spans.push(Span::styled(
                format!(" - {}", description),
                Style::default().fg(COLOR_DIM),
            ));
        }
        lines.push(Line::from(spans));
        if let Some(docs) = tag.external_docs {
            lines.push(Line::from(vec![
                Span::raw(INDENT.repeat(2)),
                Span::styled(docs, Style::default().fg(COLOR_LINK)),
            ]));
        }
    }
}

fn security_lines(doc: &Value, lines: &mut Vec<Line<'static>>) {
    let requirements = outline::security(doc);
    if requirements.is_empty() {
        lines.push(notice("No global security requirements defined."));
        return;
    }
    for requirement in requirements {
        for (scheme, scopes) in requirement.schemes {
            let text = if scopes.is_empty() {
                scheme
            } else {
                format!("{} ({})", scheme, scopes.join(", "))
            };
            lines.push(Line::from(format!("{}{}", INDENT, text)));
        }
    }
}

fn path_lines(doc: &Value, lines: &mut Vec<Line<'static>>) {
    let paths = outline::paths(doc);
    if paths.is_empty() {
        lines.push(notice("No paths defined."));
        return;
    }
    for path in paths {
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(path.path, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        for op in path.operations {
            let mut spans = vec![
                Span::raw(INDENT.repeat(2)),
                Span::styled(
                    format!("{:<7}", op.method.to_uppercase()),
                    Style::default()
                        .fg(method_color(&op.method))
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(summary) = op.summary {
                spans.push(Span::raw(summary));
            }
            if !op.tags.is_empty() {
                spans.push(Span::styled(
                    format!("  [{}]", op.tags.join(", ")),
                    Style::default().fg(COLOR_DIM),
                ));
            }
            lines.push(Line::from(spans));
            if let Some(description) = op.description {
                lines.push(notice(&format!("{}{}", INDENT.repeat(2), description)));
            }
            for (code, description) in op.responses {
                lines.push(Line::from(vec![
                    Span::raw(INDENT.repeat(4)),
                    Span::styled(code, Style::default().fg(COLOR_ACCENT)),
                    Span::styled(format!(" → {}", description), Style::default().fg(COLOR_DIM)),
                ]));
            }
        }
    }
}

fn component_lines(doc: &Value, lines: &mut Vec<Line<'static>>) {
    let groups = outline::components(doc);
    if groups.is_empty() {
        lines.push(notice("No components defined."));
        return;
    }
    for group in groups {
        lines.push(Line::from(Span::styled(
            format!("{}{}", INDENT, group.kind.label()),
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
        for entry in group.entries {
            lines.push(Line::from(format!("{}{}", INDENT.repeat(2), entry.name)));
            for detail in entry.details {
                lines.push(notice(&format!("{}{}", INDENT.repeat(2), detail)));
            }
        }
    }
}

/// Lines for the whole outline and the line index where each section starts.
pub fn outline_lines(doc: &Value, state: &OutlineState) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines = Vec::new();
    let mut starts = Vec::with_capacity(OutlineSection::ALL.len());

    for (index, section) in OutlineSection::ALL.into_iter().enumerate() {
        starts.push(lines.len());
        let expanded = state.is_expanded(section);
        let selected = index == state.selected;
        let marker = if expanded { "▾" } else { "▸" };
        let style = if selected {
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", marker, section.label()),
            style,
        )));

        if expanded {
            match section {
                OutlineSection::Info => info_lines(doc, &mut lines),
                OutlineSection::Servers => server_lines(doc, &mut lines),
                OutlineSection::Tags => tag_lines(doc, &mut lines),
                OutlineSection::Security => security_lines(doc, &mut lines),
                OutlineSection::Paths => path_lines(doc, &mut lines),
                OutlineSection::Components => component_lines(doc, &mut lines),
            }
        }
        lines.push(Line::default());
    }

    (lines, starts)
}

pub fn render_outline(frame: &mut Frame, area: Rect, app: &App, focused: bool) {
    let (lines, starts) = outline_lines(app.store.document(), &app.outline);
    let scroll = starts.get(app.outline.selected).copied().unwrap_or(0);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(lines)
        .block(pane_block("Outline", focused))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_empty_sections_show_notices() {
        let doc = json!({"openapi": "3.0.0", "info": {"title": "T", "version": "1"}, "paths": {}});
        let (lines, starts) = outline_lines(&doc, &OutlineState::default());
        let text = plain(&lines);
        assert_eq!(starts.len(), 6);
        assert!(text.iter().any(|l| l.contains("No servers defined.")));
        assert!(text.iter().any(|l| l.contains("No tags defined.")));
        assert!(text.iter().any(|l| l.contains("No paths defined.")));
        assert!(text.iter().any(|l| l.contains("No components defined.")));
    }

    #[test]
    fn test_paths_show_methods_and_responses() {
        let doc = json!({
            "openapi": "3.0.0",
            "info": {"title": "T", "version": "1"},
            "paths": {"/pets": {"get": {"summary": "List pets", "tags": ["pets"],
                "responses": {"200": {"description": "OK"}, "404": {}}}}}
        });
        let (lines, _) = outline_lines(&doc, &OutlineState::default());
        let text = plain(&lines);
        assert!(text.iter().any(|l| l.contains("GET") && l.contains("List pets") && l.contains("[pets]")));
        assert!(text.iter().any(|l| l.contains("200 → OK")));
        assert!(text.iter().any(|l| l.contains("404 → No description")));
    }

    #[test]
    fn test_collapsed_section_hides_body() {
        let doc = json!({"openapi": "3.0.0", "info": {"title": "Hidden", "version": "1"}, "paths": {}});
        let mut state = OutlineState::default();
        state.toggle_selected();
        let (lines, starts) = outline_lines(&doc, &state);
        let text = plain(&lines);
        assert!(text[0].starts_with("▸ API Info"));
        assert!(!text.iter().any(|l| l.contains("Hidden")));
        assert_eq!(starts[1], 2);
    }
}
