//! Job application form rendering

use super::field_renderer::{button_line, checkbox_line, error_line, field_lines, selector_lines};
use crate::app::{App, Row};
use job_form::Field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the application form
pub fn draw_application(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Job Application Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Rows
            Constraint::Length(1), // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    let (lines, active_span) = build_lines(app);
    let offset = scroll_offset(active_span, chunks[0].height);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), chunks[0]);

    draw_help_text(frame, chunks[1], &app.active());
}

/// Render every row; also returns the line range of the active row
fn build_lines(app: &App) -> (Vec<Line<'static>>, (usize, usize)) {
    let form = app.session.form();
    let values = form.values();
    let rows = app.rows();
    let active = app.active_row.min(rows.len() - 1);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut active_span = (0, 0);

    for (index, row) in rows.iter().enumerate() {
        let is_active = index == active;
        let start = lines.len();

        match row {
            Row::Input(field) => {
                let value = form
                    .get(field.name())
                    .ok()
                    .and_then(|v| v.as_text().map(str::to_string))
                    .unwrap_or_default();
                lines.extend(owned(field_lines(
                    field.label(),
                    &value,
                    is_active,
                    form.error_for(*field),
                )));
            }
            Row::Position => {
                lines.extend(selector_lines(
                    Field::Position.label(),
                    values.position.label(),
                    is_active,
                    form.error_for(Field::Position),
                ));
            }
            Row::Skill(name) => {
                if is_first_skill(&rows, index) {
                    lines.push(Line::from(Span::styled(
                        format!("  {}:", Field::AdditionalSkills.label()),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                let checked = values.additional_skills.get(name).unwrap_or(false);
                lines.push(checkbox_line(name, checked, is_active));
                if is_last_skill(&rows, index) {
                    lines.extend(form.error_for(Field::AdditionalSkills).map(error_line));
                }
            }
            Row::Submit => {
                lines.push(Line::from(""));
                lines.push(button_line("Submit", is_active));
            }
        }

        if is_active {
            active_span = (start, lines.len().saturating_sub(1));
        }
    }

    (lines, active_span)
}

/// Detach rendered lines from the temporary value they borrowed
fn owned(lines: Vec<Line<'_>>) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|line| {
            Line::from(
                line.spans
                    .into_iter()
                    .map(|s| Span::styled(s.content.into_owned(), s.style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn is_first_skill(rows: &[Row], index: usize) -> bool {
    index == 0 || !matches!(rows[index - 1], Row::Skill(_))
}

fn is_last_skill(rows: &[Row], index: usize) -> bool {
    !matches!(rows.get(index + 1), Some(Row::Skill(_)))
}

/// First visible line so the active row stays on screen
fn scroll_offset(active_span: (usize, usize), height: u16) -> u16 {
    let height = height.max(1) as usize;
    let (start, end) = active_span;
    if end < height {
        0
    } else {
        (end + 1 - height).min(start) as u16
    }
}

fn draw_help_text(frame: &mut Frame, area: Rect, active: &Row) {
    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key_style),
        Span::raw(": next  "),
    ];
    match active {
        Row::Position => {
            spans.push(Span::styled("←/→", key_style));
            spans.push(Span::raw(": change  "));
        }
        Row::Skill(_) => {
            spans.push(Span::styled("Space", key_style));
            spans.push(Span::raw(": toggle  "));
        }
        _ => {}
    }
    spans.extend([
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style),
        Span::raw(": submit  "),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ]);

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
