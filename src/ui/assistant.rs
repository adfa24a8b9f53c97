//! Assistant pane: credential entry, quick prompts, reply and prompt input.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::{pane_block, spinner};
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR};
use crate::app::{App, Focus};
use crate::assistant::{CredentialSource, QUICK_PROMPTS};
use crate::widgets::TextAreaInputWidget;

const PROMPT_HEIGHT: u16 = 5;
const CREDENTIAL_HEIGHT: u16 = 3;

fn pane_title(app: &App) -> &'static str {
    match app.assistant.credential().source() {
        Some(CredentialSource::Session) => "Assistant · session key",
        Some(CredentialSource::Environment) => "Assistant · env key",
        Some(CredentialSource::Build) => "Assistant · built-in key",
        None => "Assistant · no key",
    }
}

/// Body lines: status first, then the last reply.
pub fn reply_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if app.assistant.is_busy() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", spinner(app.spinner_frame())),
                Style::default().fg(COLOR_ACTIVE),
            ),
            Span::styled("Thinking...", Style::default().fg(COLOR_DIM)),
        ]));
    }
    if let Some(error) = app.assistant.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        )));
    }
    match app.assistant.reply() {
        Some(reply) => {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.extend(reply.lines().map(|l| Line::from(l.to_string())));
        }
        None if lines.is_empty() => {
            lines.push(Line::from(Span::styled(
                "Ask for changes to the specification, or press Ctrl+P for quick prompts.",
                Style::default().fg(COLOR_DIM),
            )));
        }
        None => {}
    }
    lines
}

fn quick_prompt_lines(selected: usize) -> Vec<Line<'static>> {
    QUICK_PROMPTS
        .iter()
        .enumerate()
        .map(|(i, prompt)| {
            if i == selected {
                Line::from(vec![
                    Span::styled("▶ ", Style::default().fg(COLOR_ACTIVE)),
                    Span::styled(
                        prompt.title,
                        Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(prompt.title, Style::default().fg(COLOR_ACCENT)),
                ])
            }
        })
        .collect()
}

pub fn render_assistant(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Assistant;
    let block = pane_block(pane_title(app), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let credential_open = app.assistant.credential_entry_open();
    let quick_open = app.assistant.quick_prompts_open();

    let mut constraints = Vec::with_capacity(4);
    if credential_open {
        constraints.push(Constraint::Length(CREDENTIAL_HEIGHT));
    }
    constraints.push(Constraint::Min(1));
    if quick_open {
        constraints.push(Constraint::Length(QUICK_PROMPTS.len() as u16 + 2));
    }
    constraints.push(Constraint::Length(PROMPT_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);
    let mut next = 0;

    if credential_open {
        frame.render_widget(
            TextAreaInputWidget::new(
                &mut app.credential_input,
                " OpenAI API key (Enter save · Esc cancel) ",
                focused,
            ),
            chunks[next],
        );
        next += 1;
    }

    let body = Paragraph::new(reply_lines(app)).wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[next]);
    next += 1;

    if quick_open {
        let list = Paragraph::new(quick_prompt_lines(app.assistant.quick_prompt_index()))
            .block(pane_block("Quick prompts", focused));
        frame.render_widget(list, chunks[next]);
        next += 1;
    }

    let prompt_title = if app.assistant.is_busy() {
        " Waiting for reply... "
    } else {
        " Prompt (Enter send · Alt+Enter newline) "
    };
    frame.render_widget(
        TextAreaInputWidget::new(
            &mut app.prompt_input,
            prompt_title,
            focused && !credential_open && !quick_open,
        ),
        chunks[next],
    );
}
