//! UI module for rendering the TUI

mod components;
mod forms;

use crate::app::App;
use job_form::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    forms::draw_application(frame, chunks[0], app);
    draw_status_bar(frame, chunks[1], app);

    // Modal success dialog on top of everything
    if let Some(payload) = app.success_payload() {
        components::render_success_dialog(frame, &payload);
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.session.controller();
    let (state_label, state_color) = match controller.state() {
        SubmissionState::Idle => ("idle", Color::Green),
        SubmissionState::AttemptRecorded => ("needs fixes", Color::Red),
    };

    let mut spans = vec![
        Span::styled(format!(" {state_label} "), Style::default().fg(state_color)),
        Span::styled(
            format!(
                "attempts {} · submitted {} ",
                controller.attempts(),
                controller.submissions()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!("│ {message}"),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
